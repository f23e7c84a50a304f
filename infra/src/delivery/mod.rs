//! OTP delivery gateway
//!
//! Implements the core `DeliveryGateway` seam by dispatching on the
//! identifier kind: phone numbers go out via the configured SMS provider,
//! email addresses via the SMTP mailer.

use async_trait::async_trait;
use std::sync::Arc;

use tb_core::services::auth::DeliveryGateway;
use tb_shared::utils::Identifier;

use crate::email::SmtpMailer;
use crate::sms::SmsService;

/// Dispatches OTP delivery to SMS or email based on the identifier
pub struct OtpDeliveryService {
    sms: Arc<dyn SmsService>,
    mailer: Arc<SmtpMailer>,
}

impl OtpDeliveryService {
    /// Create a new delivery dispatcher
    pub fn new(sms: Arc<dyn SmsService>, mailer: Arc<SmtpMailer>) -> Self {
        Self { sms, mailer }
    }
}

#[async_trait]
impl DeliveryGateway for OtpDeliveryService {
    async fn send_code(&self, identifier: &Identifier, code: &str) -> Result<String, String> {
        match identifier {
            Identifier::Phone(phone) => self
                .sms
                .send_verification_code(phone, code)
                .await
                .map_err(|e| e.to_string()),
            Identifier::Email(email) => self
                .mailer
                .send_otp_email(email, code)
                .await
                .map_err(|e| e.to_string()),
        }
    }
}
