//! Auth Session Entity
//!
//! The server-side record behind a bearer token. The token itself is a
//! signed reference to this row; deleting the row revokes the token.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{Email, UserId};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4) - the subject of the signed token
    pub session_id: Uuid,
    /// Reference to User
    pub user_id: UserId,
    /// The user's email at session creation (resolved identity)
    pub email: Email,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, email: Email, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            email,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::new("reader@example.com").unwrap()
    }

    #[test]
    fn test_fresh_session_not_expired() {
        let session = AuthSession::new(UserId::new(), email(), Duration::seconds(3600));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > 0);
    }

    #[test]
    fn test_expired_session() {
        let mut session = AuthSession::new(UserId::new(), email(), Duration::seconds(3600));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;

        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_expiry_honors_ttl() {
        let session = AuthSession::new(UserId::new(), email(), Duration::seconds(3600));
        let expected = Utc::now().timestamp_millis() + 3600 * 1000;

        // Within a second of the expected expiry
        assert!((session.expires_at_ms - expected).abs() < 1_000);
    }
}
