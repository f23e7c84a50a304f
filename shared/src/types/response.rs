//! API error response envelope
//!
//! Every failed request is turned into this shape at the boundary, so
//! clients can rely on `success == false` plus a human-readable `error`,
//! with optional retry metadata where the failure is transient.

use serde::{Deserialize, Serialize};

/// Error body returned by every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always false
    pub success: bool,

    /// Human-readable error message
    pub error: String,

    /// Remaining verification attempts, present on wrong-code responses
    #[serde(rename = "attemptsLeft", skip_serializing_if = "Option::is_none")]
    pub attempts_left: Option<u32>,

    /// Seconds until the request may be retried, present on cooldown and
    /// rate-limit responses
    #[serde(rename = "retryAfterSeconds", skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,

    /// Extra detail, only populated outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Create an error body with just a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            attempts_left: None,
            retry_after_seconds: None,
            details: None,
        }
    }

    /// Attach the remaining-attempts count
    pub fn with_attempts_left(mut self, attempts_left: u32) -> Self {
        self.attempts_left = Some(attempts_left);
        self
    }

    /// Attach the retry-after hint
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after_seconds = Some(seconds);
        self
    }

    /// Attach extra detail (development only)
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_body_omits_optional_fields() {
        let body = ErrorBody::new("Invalid OTP");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid OTP");
        assert!(json.get("attemptsLeft").is_none());
        assert!(json.get("retryAfterSeconds").is_none());
    }

    #[test]
    fn test_camel_case_field_names() {
        let body = ErrorBody::new("Invalid OTP")
            .with_attempts_left(2)
            .with_retry_after(120);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["attemptsLeft"], 2);
        assert_eq!(json["retryAfterSeconds"], 120);
    }
}
