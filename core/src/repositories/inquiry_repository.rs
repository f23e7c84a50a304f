//! Inquiry repository trait for customer inquiry persistence.

use async_trait::async_trait;

use crate::domain::entities::inquiry::Inquiry;
use crate::errors::DomainError;

/// Repository trait for customer inquiries
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Persist a new inquiry
    async fn create(&self, inquiry: Inquiry) -> Result<Inquiry, DomainError>;

    /// List all inquiries, newest first
    async fn find_all(&self) -> Result<Vec<Inquiry>, DomainError>;
}
