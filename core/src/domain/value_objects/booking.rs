//! Booking confirmation value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything needed to render and send a booking confirmation email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Recipient email address
    pub customer_email: String,

    /// Recipient display name
    pub customer_name: String,

    /// Booked tour name
    pub tour_name: String,

    /// Date of the tour
    pub booking_date: DateTime<Utc>,

    /// Reference the customer quotes in follow-ups
    pub booking_reference: String,

    /// Number of participants
    pub participants: u32,
}

impl BookingConfirmation {
    /// Booking date formatted for the email body, e.g.
    /// "Monday, August 3, 2026"
    pub fn formatted_date(&self) -> String {
        self.booking_date.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formatted_date() {
        let confirmation = BookingConfirmation {
            customer_email: "asha@example.com".to_string(),
            customer_name: "Asha".to_string(),
            tour_name: "Goa Getaway".to_string(),
            booking_date: Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap(),
            booking_reference: "TB-2026-0042".to_string(),
            participants: 2,
        };
        assert_eq!(confirmation.formatted_date(), "Monday, August 3, 2026");
    }
}
