//! SMS service trait and helpers

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::InfrastructureError;

// E.164: leading '+', country code, at most 15 digits total
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 regex is valid")
});

/// Check if a phone number is in valid E.164 format
pub fn is_valid_phone_number(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Trait for SMS delivery providers
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send a raw SMS message, returning the provider message id
    async fn send_sms(&self, phone: &str, message: &str)
        -> Result<String, InfrastructureError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Send a verification code with the standard message template
    async fn send_verification_code(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let message = format!(
            "Your verification code is: {}. Valid for 5 minutes.",
            code
        );
        self.send_sms(phone, &message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("+919876543210"));
        assert!(is_valid_phone_number("+14155552671"));
        assert!(!is_valid_phone_number("9876543210")); // Missing +
        assert!(!is_valid_phone_number("+0123456789")); // Invalid country code
        assert!(!is_valid_phone_number("+12345678901234567")); // Too long
    }
}
