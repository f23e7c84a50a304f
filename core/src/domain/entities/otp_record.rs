//! OTP record entity for phone and email verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Signup data captured at issuance time and replayed at verification
/// when the client omits fields from the verify request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSignup {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Outcome of a single verification attempt against a record.
///
/// The checks are strictly ordered: exhaustion first, then expiry, then
/// the code comparison, so a request against an exhausted, expired,
/// wrong-code record reports exhaustion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The submitted code matched; the record must now be discarded
    Matched,
    /// Wrong code; the attempt counter has been incremented
    Mismatch { attempts_left: u32 },
    /// The record is past its expiry
    Expired,
    /// The attempt cap was already reached
    Exhausted,
}

/// A live OTP keyed by its normalized identifier.
///
/// At most one record exists per identifier at a time; the store owns the
/// record's lifetime and this entity owns the verification state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized phone number or email address this code was sent to
    pub identifier: String,

    /// The 6-digit verification code
    pub code: String,

    /// Number of failed verification attempts made
    pub attempts: u32,

    /// Maximum attempts before the record is consumed
    pub max_attempts: u32,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Signup snapshot captured at issuance
    pub pending: Option<PendingSignup>,
}

impl OtpRecord {
    /// Creates a new record with a fresh random code and the default
    /// 5-minute expiry
    pub fn new(identifier: String, pending: Option<PendingSignup>) -> Self {
        Self::with_policy(identifier, pending, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS)
    }

    /// Creates a new record with explicit TTL and attempt-cap policy
    pub fn with_policy(
        identifier: String,
        pending: Option<PendingSignup>,
        ttl_minutes: i64,
        max_attempts: u32,
    ) -> Self {
        let issued_at = Utc::now();
        Self {
            identifier,
            code: Self::generate_code(),
            attempts: 0,
            max_attempts,
            issued_at,
            expires_at: issued_at + Duration::minutes(ttl_minutes),
            pending,
        }
    }

    /// Generates a cryptographically secure 6-digit code.
    ///
    /// Drawn from the OS CSPRNG, uniformly over 100000..=999999.
    fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(100_000..=999_999);
        code.to_string()
    }

    /// Checks if the record is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Remaining verification attempts
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Seconds until the record expires (zero if already expired)
    pub fn seconds_until_expiry(&self) -> u64 {
        let remaining = self.expires_at - Utc::now();
        remaining.num_seconds().max(0) as u64
    }

    /// Applies one verification attempt to the record.
    ///
    /// Exhaustion is checked before expiry, expiry before the code itself.
    /// A mismatch increments the attempt counter; the comparison runs in
    /// constant time.
    ///
    /// The caller is responsible for acting on the outcome: deleting the
    /// record on `Matched`, `Expired` and `Exhausted`, and persisting the
    /// incremented counter (or deleting, once `attempts_left` hits zero)
    /// on `Mismatch`.
    pub fn register_attempt(&mut self, submitted: &str) -> AttemptOutcome {
        if self.attempts >= self.max_attempts {
            return AttemptOutcome::Exhausted;
        }

        if self.is_expired() {
            return AttemptOutcome::Expired;
        }

        if constant_time_eq(self.code.as_bytes(), submitted.as_bytes()) {
            AttemptOutcome::Matched
        } else {
            self.attempts += 1;
            AttemptOutcome::Mismatch {
                attempts_left: self.attempts_left(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> OtpRecord {
        OtpRecord::new("+919876543210".to_string(), None)
    }

    #[test]
    fn test_new_record() {
        let record = record();
        assert_eq!(record.identifier, "+919876543210");
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert_eq!(record.attempts, 0);
        assert_eq!(record.attempts_left(), MAX_ATTEMPTS);
        assert!(!record.is_expired());
        assert_eq!(
            record.expires_at,
            record.issued_at + Duration::minutes(DEFAULT_EXPIRATION_MINUTES)
        );
    }

    #[test]
    fn test_generated_code_format() {
        for _ in 0..100 {
            let code = OtpRecord::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("code is numeric");
            assert!((100_000..=999_999).contains(&num));
        }
    }

    #[test]
    fn test_codes_are_not_constant() {
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| OtpRecord::generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_matching_code() {
        let mut record = record();
        let code = record.code.clone();
        assert_eq!(record.register_attempt(&code), AttemptOutcome::Matched);
        // A match does not consume an attempt; deletion is the caller's job.
        assert_eq!(record.attempts, 0);
    }

    #[test]
    fn test_mismatch_increments_attempts() {
        let mut record = record();
        assert_eq!(
            record.register_attempt("000000"),
            AttemptOutcome::Mismatch { attempts_left: 2 }
        );
        assert_eq!(record.attempts, 1);
        assert_eq!(
            record.register_attempt("111111"),
            AttemptOutcome::Mismatch { attempts_left: 1 }
        );
        assert_eq!(
            record.register_attempt("222222"),
            AttemptOutcome::Mismatch { attempts_left: 0 }
        );
        assert_eq!(record.attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn test_exhausted_record_rejects_correct_code() {
        let mut record = record();
        let code = record.code.clone();
        for _ in 0..MAX_ATTEMPTS {
            record.register_attempt("000000");
        }
        assert_eq!(record.register_attempt(&code), AttemptOutcome::Exhausted);
        assert_eq!(record.attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn test_expired_record_rejects_correct_code() {
        let mut record =
            OtpRecord::with_policy("+919876543210".to_string(), None, 0, MAX_ATTEMPTS);
        let code = record.code.clone();
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(record.is_expired());
        // Expired wins over the code comparison, so a correct code is
        // reported as expired rather than invalid.
        assert_eq!(record.register_attempt(&code), AttemptOutcome::Expired);
    }

    #[test]
    fn test_exhaustion_wins_over_expiry() {
        let mut record =
            OtpRecord::with_policy("+919876543210".to_string(), None, 0, MAX_ATTEMPTS);
        record.attempts = MAX_ATTEMPTS;
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(record.is_expired());
        assert_eq!(record.register_attempt("000000"), AttemptOutcome::Exhausted);
    }

    #[test]
    fn test_seconds_until_expiry() {
        let record = record();
        let remaining = record.seconds_until_expiry();
        assert!(remaining <= (DEFAULT_EXPIRATION_MINUTES * 60) as u64);
        assert!(remaining > ((DEFAULT_EXPIRATION_MINUTES - 1) * 60) as u64);

        let expired = OtpRecord::with_policy("+919876543210".to_string(), None, 0, MAX_ATTEMPTS);
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(expired.seconds_until_expiry(), 0);
    }

    #[test]
    fn test_pending_signup_snapshot() {
        let pending = PendingSignup {
            name: Some("Asha".to_string()),
            phone: Some("+919876543210".to_string()),
            email: Some("asha@example.com".to_string()),
        };
        let record = OtpRecord::new("+919876543210".to_string(), Some(pending.clone()));
        assert_eq!(record.pending, Some(pending));
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: OtpRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
