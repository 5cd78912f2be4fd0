use serde::{Deserialize, Serialize};

use crate::domain::errors::AuthorizationError;

/// Represents a user identifier (Firebase UID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The authenticated principal performing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub is_admin: bool,
}

impl Actor {
    pub fn new(user_id: UserId, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    pub fn assert_admin(&self) -> Result<(), AuthorizationError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AuthorizationError::PermissionDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("firebase-uid-456");
        assert_eq!(user_id.as_str(), "firebase-uid-456");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_allow_admin_actor() {
        let actor = Actor::new(UserId::new("admin-uid"), true);
        assert!(actor.assert_admin().is_ok());
    }

    #[test]
    fn should_deny_regular_actor() {
        let actor = Actor::new(UserId::new("member-uid"), false);

        let result = actor.assert_admin();

        assert!(matches!(
            result.unwrap_err(),
            AuthorizationError::PermissionDenied
        ));
    }
}
