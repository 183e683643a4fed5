//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, LoginInput, LoginUseCase, LogoutUseCase};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, LoginResponse, MessageResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
///
/// Guest-only: a request that already carries a currently-valid bearer
/// token is rejected before credentials are even looked at.
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(bearer) = extract_bearer(&headers) {
        let check = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
        if check.is_valid(&bearer).await {
            return Err(AuthError::AlreadyAuthenticated);
        }
    }

    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse::new(output.token, output.expires_in)))
}

// ============================================================================
// Logout
// ============================================================================

/// DELETE /logout
///
/// 205 on success; 404 with "You are not logged in" when no live session
/// backs the request (double logout included).
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let bearer = extract_bearer(&headers);

    let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(bearer.as_deref()).await?;

    Ok((
        StatusCode::RESET_CONTENT,
        Json(MessageResponse {
            message: "Logged out successfully",
        }),
    ))
}
