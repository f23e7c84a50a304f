//! # TrailBook Infrastructure
//!
//! Concrete implementations of the core trait seams: the in-memory OTP
//! store, SMS and SMTP delivery services, in-memory repositories, and the
//! issuance rate limiter.

pub mod cache;
pub mod delivery;
pub mod email;
pub mod rate_limit;
pub mod repositories;
pub mod sms;

use thiserror::Error;

/// Infrastructure-level errors, mapped into domain errors at the seams
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("SMS service error: {0}")]
    Sms(String),

    #[error("Email service error: {0}")]
    Email(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
