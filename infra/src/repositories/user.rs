//! In-memory user repository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use tb_core::domain::entities::user::UserIdentity;
use tb_core::errors::{AuthError, DomainError};
use tb_core::repositories::UserRepository;

/// In-process user store enforcing phone/email uniqueness
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, UserIdentity>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_phone_or_email(
        &self,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<UserIdentity>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| {
                (phone.is_some() && u.phone.as_deref() == phone)
                    || (email.is_some() && u.email.as_deref() == email)
            })
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserIdentity>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserIdentity>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: UserIdentity) -> Result<UserIdentity, DomainError> {
        // The write lock spans the uniqueness check and the insert, so two
        // racing creates cannot both pass the check.
        let mut users = self.users.write().await;

        if user.phone.is_some() && users.values().any(|u| u.phone == user.phone) {
            return Err(AuthError::DuplicateKey {
                field: "phone".to_string(),
            }
            .into());
        }
        if user.email.is_some() && users.values().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateKey {
                field: "email".to_string(),
            }
            .into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
