//! Environment detection configuration

use serde::{Deserialize, Serialize};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl Environment {
    /// Detect the environment from the `ENVIRONMENT` variable
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            Ok("staging") => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environment() {
        assert_eq!(Environment::default(), Environment::Development);
        assert!(Environment::default().is_development());
        assert!(!Environment::default().is_production());
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("ENVIRONMENT", "production");
        assert!(Environment::from_env().is_production());
        std::env::set_var("ENVIRONMENT", "staging");
        assert_eq!(Environment::from_env(), Environment::Staging);
        std::env::remove_var("ENVIRONMENT");
        assert!(Environment::from_env().is_development());
    }
}
