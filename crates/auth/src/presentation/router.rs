//! Auth Router

use axum::{
    Router,
    routing::{delete, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/logout", delete(handlers::logout::<R>))
        .with_state(state)
}
