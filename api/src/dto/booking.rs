use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tb_core::domain::value_objects::BookingConfirmation;

/// Request body for POST /api/v1/bookings/confirm.
///
/// Fields are optional at the serde level so the handler can report all
/// missing required fields at once, matching the issuance-side style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingRequest {
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub tour_name: Option<String>,
    pub booking_date: Option<DateTime<Utc>>,
    pub booking_reference: Option<String>,
    pub participants: Option<u32>,
}

impl ConfirmBookingRequest {
    /// Names of required fields absent from the request
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.customer_email.is_none() {
            missing.push("customerEmail");
        }
        if self.customer_name.is_none() {
            missing.push("customerName");
        }
        if self.tour_name.is_none() {
            missing.push("tourName");
        }
        if self.booking_date.is_none() {
            missing.push("bookingDate");
        }
        if self.booking_reference.is_none() {
            missing.push("bookingReference");
        }
        missing
    }

    /// Convert into the domain value object; fails with the missing field
    /// names
    pub fn into_confirmation(self) -> Result<BookingConfirmation, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(BookingConfirmation {
            customer_email: self.customer_email.unwrap_or_default(),
            customer_name: self.customer_name.unwrap_or_default(),
            tour_name: self.tour_name.unwrap_or_default(),
            booking_date: self.booking_date.unwrap_or_else(Utc::now),
            booking_reference: self.booking_reference.unwrap_or_default(),
            participants: self.participants.unwrap_or(1),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingResponse {
    pub success: bool,
    pub message: String,
    pub booking_reference: String,
    pub message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_camel_case_names() {
        let request = ConfirmBookingRequest {
            customer_email: Some("asha@example.com".to_string()),
            ..ConfirmBookingRequest::default()
        };
        let missing = request.missing_fields();
        assert_eq!(
            missing,
            vec!["customerName", "tourName", "bookingDate", "bookingReference"]
        );
    }

    #[test]
    fn test_into_confirmation_defaults_participants_to_one() {
        let request = ConfirmBookingRequest {
            customer_email: Some("asha@example.com".to_string()),
            customer_name: Some("Asha".to_string()),
            tour_name: Some("Goa Getaway".to_string()),
            booking_date: Some(Utc::now()),
            booking_reference: Some("TB-2026-0042".to_string()),
            participants: None,
        };

        let confirmation = request.into_confirmation().unwrap();
        assert_eq!(confirmation.participants, 1);
        assert_eq!(confirmation.booking_reference, "TB-2026-0042");
    }
}
