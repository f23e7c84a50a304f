//! In-memory OTP store
//!
//! A single async mutex guards the whole map, which makes every
//! per-identifier read-modify-write atomic: two concurrent `consume`
//! calls for the same identifier serialize on the lock and can never
//! observe the same attempt count. Records for different identifiers
//! contend only on that lock.
//!
//! Expiry is lazy. Nothing sweeps the map in the background; expired
//! records are discarded when issuance or verification next touches them.
//! A TTL-native external cache can replace this implementation as long as
//! per-key atomicity is preserved.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use tb_core::domain::entities::otp_record::{AttemptOutcome, OtpRecord};
use tb_core::errors::DomainResult;
use tb_core::repositories::{ConsumeOutcome, OtpStore};
use tb_shared::utils::mask_identifier;

/// In-process OTP store backed by a mutex-guarded map
#[derive(Default)]
pub struct InMemoryOtpStore {
    records: Mutex<HashMap<String, OtpRecord>>,
}

impl InMemoryOtpStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live-or-expired records currently held
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, record: OtpRecord) -> DomainResult<()> {
        let mut records = self.records.lock().await;
        debug!(
            identifier = %mask_identifier(&record.identifier),
            expires_at = %record.expires_at,
            "Storing OTP record"
        );
        records.insert(record.identifier.clone(), record);
        Ok(())
    }

    async fn get(&self, identifier: &str) -> DomainResult<Option<OtpRecord>> {
        let records = self.records.lock().await;
        Ok(records.get(identifier).cloned())
    }

    async fn consume(&self, identifier: &str, submitted: &str) -> DomainResult<ConsumeOutcome> {
        let mut records = self.records.lock().await;

        let Some(record) = records.get_mut(identifier) else {
            return Ok(ConsumeOutcome::Missing);
        };

        match record.register_attempt(submitted) {
            AttemptOutcome::Exhausted => {
                records.remove(identifier);
                Ok(ConsumeOutcome::Exhausted)
            }
            AttemptOutcome::Expired => {
                records.remove(identifier);
                Ok(ConsumeOutcome::Expired)
            }
            AttemptOutcome::Matched => {
                let taken = record.clone();
                records.remove(identifier);
                Ok(ConsumeOutcome::Matched(taken))
            }
            AttemptOutcome::Mismatch { attempts_left } => {
                if attempts_left == 0 {
                    // The failing attempt that reaches the cap consumes
                    // the record; the next caller sees Missing.
                    records.remove(identifier);
                }
                Ok(ConsumeOutcome::Mismatch { attempts_left })
            }
        }
    }

    async fn delete(&self, identifier: &str) -> DomainResult<()> {
        let mut records = self.records.lock().await;
        if records.remove(identifier).is_some() {
            debug!(
                identifier = %mask_identifier(identifier),
                "Deleted OTP record"
            );
        }
        Ok(())
    }
}
