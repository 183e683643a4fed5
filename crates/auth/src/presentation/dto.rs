//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Token payload inside the login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenData {
    pub token: String,
    /// Always `"bearer"`
    pub token_type: &'static str,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Login response envelope
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub data: TokenData,
}

impl LoginResponse {
    pub fn new(token: String, expires_in: u64) -> Self {
        Self {
            message: "Successfully authenticated",
            data: TokenData {
                token,
                token_type: "bearer",
                expires_in,
            },
        }
    }
}

// ============================================================================
// Logout
// ============================================================================

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse::new("abc.def".to_string(), 3600);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["message"], "Successfully authenticated");
        assert_eq!(json["data"]["token"], "abc.def");
        assert_eq!(json["data"]["token_type"], "bearer");
        assert_eq!(json["data"]["expires_in"], 3600);
    }
}
