//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `environment` - Environment detection
//! - `server` - HTTP server binding
//! - `otp` - OTP issuance and verification policy
//! - `rate_limit` - Request rate limiting for the issuance endpoint

pub mod environment;
pub mod otp;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::Environment;
pub use otp::OtpConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// OTP policy configuration
    pub otp: OtpConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            otp: OtpConfig::from_env(environment),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            server: ServerConfig::default(),
            otp: OtpConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}
