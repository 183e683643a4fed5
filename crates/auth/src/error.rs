//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed: unknown email or wrong password
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// Bearer token absent, malformed, expired, or revoked
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Logout attempted without an authenticated session
    #[error("You are not logged in")]
    NotAuthenticated,

    /// Guest-only route called with a valid session attached
    #[error("Already authenticated")]
    AlreadyAuthenticated,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            // Deliberately non-standard: logout without a session has
            // always been surfaced as 404 and clients depend on it.
            AuthError::NotAuthenticated => StatusCode::NOT_FOUND,
            AuthError::AlreadyAuthenticated => StatusCode::FORBIDDEN,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::NotAuthenticated => ErrorKind::NotFound,
            AuthError::AlreadyAuthenticated => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel's sqlx classification
    /// (pool exhaustion surfaces as 503, not a blanket 500).
    pub fn to_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            // Never leak internals to the caller
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthenticated => {
                tracing::debug!("Request with missing or invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
