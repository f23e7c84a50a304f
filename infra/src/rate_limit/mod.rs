//! In-memory request rate limiter
//!
//! Sliding-window limiter keyed by client IP, guarding the OTP issuance
//! endpoint. Old hits are pruned lazily on each acquisition.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use tb_core::errors::DomainResult;
use tb_core::services::auth::RateLimiter;
use tb_shared::config::RateLimitConfig;

/// In-process sliding-window rate limiter
pub struct InMemoryRateLimiter {
    max_requests: u32,
    window: Duration,
    hits: Mutex<HashMap<String, Vec<Instant>>>,
}

impl InMemoryRateLimiter {
    /// Create a limiter admitting `max_requests` per `window`
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Create from shared configuration
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, Duration::from_secs(config.window_secs))
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn try_acquire(&self, key: &str) -> DomainResult<Option<u64>> {
        let now = Instant::now();
        let mut hits = self.hits.lock().await;

        let entry = hits.entry(key.to_string()).or_default();
        entry.retain(|hit| now.duration_since(*hit) < self.window);

        if entry.len() >= self.max_requests as usize {
            // Oldest hit in the window decides when a slot frees up.
            let retry_after = entry
                .first()
                .map(|oldest| {
                    self.window
                        .saturating_sub(now.duration_since(*oldest))
                        .as_secs()
                        .max(1)
                })
                .unwrap_or(1);

            warn!(
                key = key,
                retry_after, "Rate limit exceeded for OTP issuance"
            );
            return Ok(Some(retry_after));
        }

        entry.push(now);
        Ok(None)
    }
}
