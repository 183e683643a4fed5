//! Authenticated Identity
//!
//! The identity resolved by the session guard and handed to downstream
//! handlers through request extensions. Handlers receive it explicitly;
//! there is no ambient "current user" global.

use crate::id::UserId;

/// Resolved identity of an authenticated caller
#[derive(Debug, Clone)]
pub struct Identity {
    /// The authenticated user's ID
    pub user_id: UserId,
    /// The authenticated user's email
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;

    #[test]
    fn test_identity_clone() {
        let identity = Identity {
            user_id: Id::new(),
            email: "reader@example.com".to_string(),
        };
        let cloned = identity.clone();
        assert_eq!(cloned.user_id, identity.user_id);
        assert_eq!(cloned.email, identity.email);
    }
}
