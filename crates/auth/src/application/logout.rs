//! Logout Use Case
//!
//! Invalidates the caller's session so the same token can never be used
//! again. Guards against double logout: with no live session behind the
//! token the use case fails with `NotAuthenticated`.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Revoke the session behind the bearer token
    ///
    /// `bearer` is `None` when the request carried no Authorization header.
    pub async fn execute(&self, bearer: Option<&str>) -> AuthResult<()> {
        let bearer = bearer.ok_or(AuthError::NotAuthenticated)?;

        let session_id = token::parse(bearer, &self.config.session_secret)
            .map_err(|_| AuthError::NotAuthenticated)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::NotAuthenticated)?;

        if session.is_expired() {
            // The row is dead either way; remove it and report no session.
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::NotAuthenticated);
        }

        self.session_repo.delete(session_id).await?;

        tracing::info!(
            user_id = %session.user_id,
            session_id = %session.session_id,
            "User logged out"
        );

        Ok(())
    }
}
