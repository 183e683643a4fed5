//! User Entity
//!
//! Identity plus hashed password credential. Used only by the credential
//! validator during login; never rendered over HTTP. Users are seeded out
//! of band - there is no registration endpoint.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{Email, UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// User ID (UUID v4)
    pub user_id: UserId,
    /// Login email (unique, stored lowercased)
    pub email: Email,
    /// Argon2id password hash (PHC string)
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly assigned ID
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
