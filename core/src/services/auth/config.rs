//! Configuration for the authentication service

use tb_shared::config::OtpConfig;

use crate::domain::entities::otp_record::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Number of minutes before an issued code expires
    pub code_ttl_minutes: i64,

    /// Maximum number of verification attempts allowed per code
    pub max_attempts: u32,

    /// Calling code prepended to bare 10-digit phone numbers
    pub default_calling_code: String,

    /// Upper bound on a single delivery gateway call, in seconds
    pub delivery_timeout_secs: u64,

    /// Whether issuance results carry the raw code for debugging
    pub expose_debug_code: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
            default_calling_code: String::from("91"),
            delivery_timeout_secs: 10,
            expose_debug_code: false,
        }
    }
}

impl From<&OtpConfig> for AuthServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_ttl_minutes: config.code_ttl_minutes,
            max_attempts: config.max_attempts,
            default_calling_code: config.default_calling_code.clone(),
            delivery_timeout_secs: config.delivery_timeout_secs,
            expose_debug_code: config.expose_debug_code,
        }
    }
}
