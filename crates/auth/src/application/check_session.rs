//! Check Session Use Case
//!
//! Resolves a bearer token to an authenticated session. Called on every
//! protected request; validity is never cached in-process.

use std::sync::Arc;

use kernel::identity::Identity;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthSessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a bearer token to an identity, or fail with `Unauthenticated`
    pub async fn authenticate(&self, bearer: &str) -> AuthResult<Identity> {
        let session = self.get_session(bearer).await?;

        Ok(Identity {
            user_id: session.user_id,
            email: session.email.as_str().to_string(),
        })
    }

    /// Just check whether a token is currently valid
    pub async fn is_valid(&self, bearer: &str) -> bool {
        self.get_session(bearer).await.is_ok()
    }

    /// Verify the token signature and load the backing session
    ///
    /// An expired session row is deleted on sight, so a later replay of the
    /// same token fails on the missing row.
    pub async fn get_session(&self, bearer: &str) -> AuthResult<AuthSession> {
        let session_id = token::parse(bearer, &self.config.session_secret)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::Unauthenticated)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::Unauthenticated);
        }

        Ok(session)
    }
}
