//! OTP issuance and verification policy configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Policy knobs for the OTP workflow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Number of minutes before an issued code expires
    pub code_ttl_minutes: i64,

    /// Maximum number of verification attempts allowed per code
    pub max_attempts: u32,

    /// Calling code prepended to bare 10-digit phone numbers
    pub default_calling_code: String,

    /// Upper bound on a single delivery gateway call, in seconds
    pub delivery_timeout_secs: u64,

    /// Whether issuance responses carry the raw code for debugging.
    /// Only ever true outside production.
    pub expose_debug_code: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 5,
            max_attempts: 3,
            default_calling_code: String::from("91"),
            delivery_timeout_secs: 10,
            expose_debug_code: false,
        }
    }
}

impl OtpConfig {
    /// Load from environment variables, falling back to defaults.
    ///
    /// `expose_debug_code` is forced off in production regardless of the
    /// `OTP_EXPOSE_DEBUG_CODE` variable.
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();
        let expose_debug_code = !environment.is_production()
            && std::env::var("OTP_EXPOSE_DEBUG_CODE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(environment.is_development());

        Self {
            code_ttl_minutes: std::env::var("OTP_CODE_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.code_ttl_minutes),
            max_attempts: std::env::var("OTP_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_attempts),
            default_calling_code: std::env::var("OTP_DEFAULT_CALLING_CODE")
                .unwrap_or(defaults.default_calling_code),
            delivery_timeout_secs: std::env::var("OTP_DELIVERY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.delivery_timeout_secs),
            expose_debug_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OtpConfig::default();
        assert_eq!(config.code_ttl_minutes, 5);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.default_calling_code, "91");
        assert!(!config.expose_debug_code);
    }

    #[test]
    fn test_debug_code_never_exposed_in_production() {
        std::env::set_var("OTP_EXPOSE_DEBUG_CODE", "true");
        let config = OtpConfig::from_env(Environment::Production);
        assert!(!config.expose_debug_code);
        std::env::remove_var("OTP_EXPOSE_DEBUG_CODE");
    }
}
