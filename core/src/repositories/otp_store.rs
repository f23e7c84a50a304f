//! OTP store trait defining the interface for OTP record persistence.
//!
//! The store is the only stateful collaborator of the OTP workflow and
//! exclusively owns record lifetimes. Implementations must make each
//! per-identifier read-modify-write atomic: two concurrent `consume` calls
//! for the same identifier must never observe the same attempt count.

use async_trait::async_trait;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainResult;

/// Result of one atomic verification attempt against the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumeOutcome {
    /// No record exists for the identifier (never issued, already used,
    /// or evicted)
    Missing,

    /// The record had already reached its attempt cap; it has been deleted
    Exhausted,

    /// The record was past its expiry; it has been deleted
    Expired,

    /// Wrong code; the attempt counter was incremented, and the record was
    /// deleted if that exhausted its attempts
    Mismatch { attempts_left: u32 },

    /// The code matched; the record has been deleted and is returned so
    /// the caller can provision from its pending snapshot
    Matched(OtpRecord),
}

/// Keyed store for live OTP records.
///
/// At most one record exists per identifier; `put` overwrites. Expiry is
/// lazy: implementations never need a background sweeper, but may run one
/// as long as no record is evicted before its `expires_at`.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a record, replacing any existing record for the identifier
    async fn put(&self, record: OtpRecord) -> DomainResult<()>;

    /// Fetch the record for an identifier, expired or not
    async fn get(&self, identifier: &str) -> DomainResult<Option<OtpRecord>>;

    /// Apply one verification attempt atomically.
    ///
    /// Runs the record's full state machine (exhaustion, expiry, code
    /// comparison) and the resulting mutation or deletion under the
    /// store's synchronization, so concurrent attempts against one
    /// identifier serialize.
    async fn consume(&self, identifier: &str, submitted: &str) -> DomainResult<ConsumeOutcome>;

    /// Delete the record for an identifier, if any
    async fn delete(&self, identifier: &str) -> DomainResult<()>;
}
