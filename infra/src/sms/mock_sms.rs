//! Mock SMS service implementation
//!
//! Logs messages instead of sending them. Used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use tb_shared::utils::mask_identifier;

use crate::InfrastructureError;

use super::sms_service::{is_valid_phone_number, SmsService};

/// Mock SMS service for development and testing
#[derive(Clone)]
pub struct MockSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsService for MockSmsService {
    async fn send_sms(
        &self,
        phone: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_phone_number(phone) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_identifier(phone)
            )));
        }

        if self.simulate_failure {
            warn!(
                phone = %mask_identifier(phone),
                "Mock SMS service simulating failure"
            );
            return Err(InfrastructureError::Sms(
                "Simulated SMS sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS SERVICE - MESSAGE #{}", count);
            println!("To: {}", phone);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            phone = %mask_identifier(phone),
            message_id = %message_id,
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_success() {
        let service = MockSmsService::with_options(false, false);
        let message_id = service
            .send_sms("+919876543210", "Test message")
            .await
            .unwrap();

        assert!(message_id.starts_with("mock_"));
        assert_eq!(service.message_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_phone_rejected() {
        let service = MockSmsService::with_options(false, false);
        let result = service.send_sms("9876543210", "Test message").await;

        assert!(matches!(result, Err(InfrastructureError::Sms(ref msg)) if msg.contains("Invalid phone number")));
        assert_eq!(service.message_count(), 0);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let service = MockSmsService::with_options(false, true);
        let result = service.send_sms("+919876543210", "Test message").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_verification_code_template() {
        let service = MockSmsService::with_options(false, false);
        let result = service
            .send_verification_code("+919876543210", "123456")
            .await;
        assert!(result.is_ok());
        assert_eq!(service.message_count(), 1);
    }
}
