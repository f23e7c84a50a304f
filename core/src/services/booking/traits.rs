//! Trait for booking confirmation mail delivery

use async_trait::async_trait;

use crate::domain::value_objects::BookingConfirmation;

/// Trait for sending booking confirmation emails
#[async_trait]
pub trait BookingMailer: Send + Sync {
    /// Render and send the confirmation mail.
    ///
    /// Returns the provider message id on success, or an error message.
    async fn send_booking_confirmation(
        &self,
        confirmation: &BookingConfirmation,
    ) -> Result<String, String>;
}
