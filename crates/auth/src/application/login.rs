//! Login Use Case
//!
//! Validates email + password credentials and issues a bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    /// Login email
    pub email: String,
    /// Raw password
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Authenticate the credentials and create a session
    ///
    /// Any defect in the input (malformed email, unknown user, wrong
    /// password) collapses into `InvalidCredentials` so the response does
    /// not reveal which part failed.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession::new(
            user.user_id,
            user.email.clone(),
            self.config.token_ttl_chrono(),
        );

        self.session_repo.create(&session).await?;

        let token = token::sign(session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            expires_in: self.config.token_ttl_secs(),
        })
    }
}
