//! Customer inquiry entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing state of an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
}

impl Default for InquiryStatus {
    fn default() -> Self {
        InquiryStatus::New
    }
}

/// A customer inquiry, optionally tied to a package by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    /// Lowercased email address
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub package: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Creates a new inquiry in the `New` state
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        message: String,
        package: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email: email.trim().to_lowercase(),
            phone,
            message,
            package,
            status: InquiryStatus::default(),
            created_at: Utc::now(),
        }
    }
}
