//! User repository trait defining the interface for user persistence.
//!
//! The user store exclusively owns `UserIdentity` persistence. Uniqueness
//! of phone and email is enforced here; a violation surfaces as
//! `AuthError::DuplicateKey` so provisioning races map onto a single,
//! well-defined error.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::UserIdentity;
use crate::errors::DomainError;

/// Repository trait for user identity persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user matching the given phone OR email.
    ///
    /// Either argument may be absent; a `None` never matches anything.
    async fn find_by_phone_or_email(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<UserIdentity>, DomainError>;

    /// Find a user by normalized email address
    async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserIdentity>, DomainError>;

    /// Persist a new user.
    ///
    /// Fails with `AuthError::DuplicateKey` if another user already holds
    /// the phone or email.
    async fn create(&self, user: UserIdentity) -> Result<UserIdentity, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AuthError;

    fn user(phone: &str, email: &str) -> UserIdentity {
        UserIdentity::new(
            Some("Asha".to_string()),
            Some(phone.to_string()),
            Some(email.to_string()),
            None,
        )
    }

    #[tokio::test]
    async fn test_mock_create_and_find() {
        let repo = mock::MockUserRepository::new();
        let created = repo
            .create(user("+919876543210", "asha@example.com"))
            .await
            .unwrap();

        let by_id = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(by_id.unwrap().id, created.id);

        let by_phone = repo
            .find_by_phone_or_email(Some("+919876543210"), None)
            .await
            .unwrap();
        assert!(by_phone.is_some());

        let by_email = repo.find_by_email("asha@example.com").await.unwrap();
        assert_eq!(by_email.unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_mock_none_matches_nothing() {
        let repo = mock::MockUserRepository::new();
        // A user without an email must not match a phone-or-email lookup
        // where both sides are absent.
        repo.create(UserIdentity::new(None, Some("+919876543210".to_string()), None, None))
            .await
            .unwrap();

        let found = repo.find_by_phone_or_email(None, None).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_mock_duplicate_phone_rejected() {
        let repo = mock::MockUserRepository::new();
        repo.create(user("+919876543210", "asha@example.com"))
            .await
            .unwrap();

        let result = repo.create(user("+919876543210", "other@example.com")).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::DuplicateKey { ref field })) if field == "phone"
        ));
    }

    #[tokio::test]
    async fn test_mock_duplicate_email_rejected() {
        let repo = mock::MockUserRepository::new();
        repo.create(user("+919876543210", "asha@example.com"))
            .await
            .unwrap();

        let result = repo.create(user("+919999999999", "asha@example.com")).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::DuplicateKey { ref field })) if field == "email"
        ));
    }
}
