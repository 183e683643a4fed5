//! Error conversions and HTTP rendering for [`AppError`]

use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classifies database failures by PostgreSQL error code.
///
/// The unique-violation arm backs the partial unique index on live book
/// names: a write racing past the validator's uniqueness probe still
/// surfaces as a conflict instead of a 500.
#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    // Class 53/57: resource exhaustion and operator shutdown
                    Some(code) if code.starts_with("53") || code.starts_with("57") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Flat error body: {"message": ...} plus an "errors" map for
        // validation failures. Server errors never leak internals.
        let body = match self.errors() {
            Some(errors) => serde_json::json!({
                "message": self.message(),
                "errors": errors,
            }),
            None => serde_json::json!({
                "message": self.message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
