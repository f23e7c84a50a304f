//! Trait for OTP delivery integration

use async_trait::async_trait;
use tb_shared::utils::Identifier;

/// Trait for the OTP delivery gateway.
///
/// The gateway is opaque, possibly slow and possibly failing; the service
/// bounds each call with a timeout and performs no retries. Retrying is
/// the caller's responsibility via re-issuance once the cooldown lapses.
#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    /// Send a verification code to a phone number or email address.
    ///
    /// Returns the provider message id on success, or an error message.
    async fn send_code(&self, identifier: &Identifier, code: &str) -> Result<String, String>;
}
