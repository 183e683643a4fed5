//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::{Email, UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user (seeding path)
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Delete a session (revokes its token)
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
