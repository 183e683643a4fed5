//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes. The
//! resolved [`Identity`] is injected into request extensions so handlers
//! receive the caller explicitly - there is no ambient current user.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::identity::Identity;
use platform::bearer::extract_bearer;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

/// Middleware that requires a valid bearer token
///
/// Apply with `axum::middleware::from_fn_with_state`. The session store is
/// consulted on every call; a token revoked by logout fails here even
/// though its signature still verifies.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let bearer = match extract_bearer(req.headers()) {
        Some(bearer) => bearer,
        None => return Err(AuthError::Unauthenticated.into_response()),
    };

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    let identity = match use_case.authenticate(&bearer).await {
        Ok(identity) => identity,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert::<Identity>(identity);

    Ok(next.run(req).await)
}
