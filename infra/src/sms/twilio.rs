//! Twilio SMS service implementation

use async_trait::async_trait;
use tracing::{error, info};
use twilio::{Client, OutboundMessage};

use tb_shared::utils::mask_identifier;

use crate::InfrastructureError;

use super::sms_service::{is_valid_phone_number, SmsService};

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_PHONE_NUMBER")
            .map_err(|_| InfrastructureError::Config("TWILIO_PHONE_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_identifier(&config.from_number),
            "Twilio SMS service initialized"
        );

        Self { client, config }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Ok(Self::new(TwilioConfig::from_env()?))
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
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

        let outbound = OutboundMessage::new(&self.config.from_number, phone, message);

        match self.client.send_message(outbound).await {
            Ok(response) => {
                info!(
                    provider = "twilio",
                    phone = %mask_identifier(phone),
                    sid = %response.sid,
                    "SMS sent successfully"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    provider = "twilio",
                    phone = %mask_identifier(phone),
                    error = %e,
                    "Failed to send SMS"
                );
                Err(InfrastructureError::Sms(format!(
                    "Failed to send SMS: {}",
                    e
                )))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
