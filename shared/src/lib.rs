//! # TrailBook Shared
//!
//! Cross-cutting types used by every layer of the TrailBook backend:
//! environment-driven configuration, the API response envelope, and
//! identifier (phone/email) normalization utilities.

pub mod config;
pub mod types;
pub mod utils;
