//! Common ID Types
//!
//! Typed UUID wrappers so a user ID and a session ID can never be swapped
//! at a call site, even though both are UUIDs underneath.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// UUID newtype parameterized by a marker type
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Mint a fresh random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. read back from storage)
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Borrow the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }
}

// Manual impls: derive would bound them on T, which is only a marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for AuthSession IDs
    pub struct AuthSession;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type AuthSessionId = Id<markers::AuthSession>;
