//! User identity entity, created only after a successful OTP verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// Phone and email are stored in normalized form and are each unique
/// across the user store when present. The password hash exists only for
/// accounts registered through the password flow variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: Option<String>,

    /// Normalized phone number (unique when present)
    pub phone: Option<String>,

    /// Normalized email address (unique when present)
    pub email: Option<String>,

    /// bcrypt password hash, never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Creates a new user identity
    pub fn new(
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        password_hash: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// Whether this identity can authenticate with a password
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = UserIdentity::new(
            Some("Asha".to_string()),
            Some("+919876543210".to_string()),
            Some("asha@example.com".to_string()),
            None,
        );

        assert_eq!(user.name.as_deref(), Some("Asha"));
        assert_eq!(user.phone.as_deref(), Some("+919876543210"));
        assert!(!user.has_password());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = UserIdentity::new(
            None,
            None,
            Some("asha@example.com".to_string()),
            Some("$2b$12$fakehash".to_string()),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(user.has_password());
    }
}
