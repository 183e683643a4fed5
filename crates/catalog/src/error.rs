//! Catalog Error Types
//!
//! Catalog-specific error variants integrating with the unified
//! `kernel::error::AppError` system. Validation failures carry the
//! field -> message map that is rendered under `"errors"` in the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::{AppError, FieldErrors};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Unknown book id, or the row is soft-deleted
    #[error("Book not found")]
    NotFound,

    /// One or more field rules violated on a write
    #[error("The given data was invalid.")]
    Validation(FieldErrors),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    ///
    /// Database errors report 500 here; `to_app_error` refines them per
    /// PostgreSQL error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound => ErrorKind::NotFound,
            CatalogError::Validation(_) => ErrorKind::UnprocessableEntity,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel's sqlx classification, so a
    /// duplicate name racing past the validator into the partial unique
    /// index comes back as a conflict rather than a blanket 500.
    pub fn to_app_error(self) -> AppError {
        match self {
            CatalogError::Validation(errors) => {
                AppError::unprocessable("The given data was invalid.").with_errors(errors)
            }
            CatalogError::Database(e) => AppError::from(e),
            // Never leak internals to the caller
            CatalogError::Internal(_) => AppError::internal("Internal server error"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::Validation(errors) => {
                tracing::debug!(fields = ?errors.keys(), "Book validation failed");
            }
            CatalogError::NotFound => {
                tracing::debug!("Book not found");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CatalogError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CatalogError::Validation(FieldErrors::new()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CatalogError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_carries_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "name".to_string(),
            vec!["The name field is required.".to_string()],
        );

        let app_error = CatalogError::Validation(errors).to_app_error();
        assert_eq!(app_error.message(), "The given data was invalid.");
        assert!(app_error.errors().is_some_and(|e| e.contains_key("name")));
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let err = CatalogError::Internal("secret detail".into());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[test]
    fn test_database_errors_classified_by_kernel() {
        // A pool timeout is retryable, not an internal fault
        let err = CatalogError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_app_error().status_code(), 503);

        let err = CatalogError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_app_error().status_code(), 404);
    }
}
