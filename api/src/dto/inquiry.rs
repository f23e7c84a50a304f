use serde::{Deserialize, Serialize};
use validator::Validate;

use tb_core::domain::entities::inquiry::Inquiry;

/// Request body for POST /api/v1/inquiries
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInquiryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub message: String,

    /// Package name the inquiry refers to
    #[validate(length(max = 200))]
    pub package: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryCreatedResponse {
    pub success: bool,
    pub message: String,
    pub data: Inquiry,
}

#[derive(Debug, Clone, Serialize)]
pub struct InquiryListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Inquiry>,
}
