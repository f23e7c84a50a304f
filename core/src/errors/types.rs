//! Domain-specific error types for the OTP workflow and provisioning.
//!
//! These errors represent the failure states of issuance, verification and
//! user provisioning. HTTP status codes and response bodies are assigned in
//! the presentation layer.

use thiserror::Error;

/// Authentication and OTP workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone number or email format")]
    InvalidIdentifier,

    #[error("OTP already sent. Please wait before requesting a new one")]
    CooldownActive { retry_after_seconds: u64 },

    #[error("OTP not found or expired")]
    NotFoundOrExpired,

    #[error("Too many attempts. Please request a new OTP")]
    AttemptsExhausted,

    #[error("OTP expired")]
    Expired,

    #[error("Invalid OTP")]
    InvalidCode { attempts_left: u32 },

    #[error("User already exists with this phone/email")]
    UserAlreadyExists,

    #[error("User with this {field} already exists")]
    DuplicateKey { field: String },

    #[error("Failed to send OTP")]
    DeliveryFailed,

    #[error("Incorrect email or password")]
    AuthenticationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Missing required fields: {fields}")]
    RequiredFields { fields: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}
