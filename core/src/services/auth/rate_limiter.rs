//! Trait for request rate limiting
//!
//! Rate limiting protects the issuance endpoint from abuse and sits
//! outside the OTP workflow proper; the route handler consults it before
//! touching the service.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Trait for fixed-window request rate limiting
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Try to admit one request for the given key (typically a client IP).
    ///
    /// Returns `None` when the request was admitted and counted, or
    /// `Some(seconds)` until the window resets when the limit is reached.
    async fn try_acquire(&self, key: &str) -> DomainResult<Option<u64>>;
}
