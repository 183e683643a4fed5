//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Token TTL (fixed; default 60 minutes)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            token_ttl: Duration::from_secs(60 * 60), // 60 minutes
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Token TTL in whole seconds (the `expires_in` surfaced at login)
    pub fn token_ttl_secs(&self) -> u64 {
        self.token_ttl.as_secs()
    }

    /// Token TTL as a chrono duration for expiry arithmetic
    pub fn token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.token_ttl)
            .unwrap_or_else(|_| chrono::Duration::seconds(60 * 60))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl_secs(), 3600);
    }

    #[test]
    fn test_random_secret_is_not_zeroed() {
        let config = AuthConfig::with_random_secret();
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }
}
