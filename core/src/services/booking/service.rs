//! Booking confirmation service

use std::sync::Arc;

use tb_shared::utils::mask_identifier;

use crate::domain::value_objects::BookingConfirmation;
use crate::errors::{DomainError, DomainResult};

use super::traits::BookingMailer;

/// Sends transactional booking confirmation emails
pub struct BookingService<M: BookingMailer> {
    mailer: Arc<M>,
}

impl<M: BookingMailer> BookingService<M> {
    /// Create a new booking service
    pub fn new(mailer: Arc<M>) -> Self {
        Self { mailer }
    }

    /// Send the confirmation mail for a booking.
    ///
    /// Returns the provider message id.
    pub async fn confirm(&self, confirmation: &BookingConfirmation) -> DomainResult<String> {
        let message_id = self
            .mailer
            .send_booking_confirmation(confirmation)
            .await
            .map_err(|error| {
                tracing::error!(
                    recipient = %mask_identifier(&confirmation.customer_email),
                    booking_reference = %confirmation.booking_reference,
                    error = %error,
                    event = "booking_mail_failed",
                    "Failed to send booking confirmation"
                );
                DomainError::Internal {
                    message: format!("Failed to send booking confirmation: {}", error),
                }
            })?;

        tracing::info!(
            recipient = %mask_identifier(&confirmation.customer_email),
            booking_reference = %confirmation.booking_reference,
            message_id = %message_id,
            event = "booking_mail_sent",
            "Booking confirmation sent"
        );

        Ok(message_id)
    }
}
