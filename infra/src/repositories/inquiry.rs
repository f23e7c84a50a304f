//! In-memory inquiry repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use tb_core::domain::entities::inquiry::Inquiry;
use tb_core::errors::DomainError;
use tb_core::repositories::InquiryRepository;

/// In-process inquiry store
#[derive(Default)]
pub struct InMemoryInquiryRepository {
    inquiries: RwLock<Vec<Inquiry>>,
}

impl InMemoryInquiryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquiryRepository for InMemoryInquiryRepository {
    async fn create(&self, inquiry: Inquiry) -> Result<Inquiry, DomainError> {
        let mut inquiries = self.inquiries.write().await;
        inquiries.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn find_all(&self) -> Result<Vec<Inquiry>, DomainError> {
        let inquiries = self.inquiries.read().await;
        let mut all = inquiries.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let repo = InMemoryInquiryRepository::new();

        repo.create(Inquiry::new(
            "Asha".to_string(),
            "asha@example.com".to_string(),
            None,
            "Is the Goa trip available in June?".to_string(),
            Some("Goa Getaway".to_string()),
        ))
        .await
        .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        repo.create(Inquiry::new(
            "Ravi".to_string(),
            "ravi@example.com".to_string(),
            Some("+919876543210".to_string()),
            "Do you arrange pickup from the airport?".to_string(),
            None,
        ))
        .await
        .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ravi");
        assert_eq!(all[1].name, "Asha");
    }
}
