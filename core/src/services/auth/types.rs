//! Types for authentication service results

use chrono::{DateTime, Utc};

use crate::domain::entities::otp_record::PendingSignup;
use crate::domain::entities::user::UserIdentity;

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct IssueResult {
    /// The delivery provider's message id
    pub message_id: String,

    /// When the issued code expires
    pub expires_at: DateTime<Utc>,

    /// Seconds until a new code may be requested for this identifier
    pub resend_after: u64,

    /// The raw code, present only when the service is configured to
    /// expose it (non-production debugging)
    pub debug_code: Option<String>,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    /// The provisioned user identity
    pub user: UserIdentity,

    /// Whether the identity was created by this verification
    pub is_new_user: bool,
}

/// Registration data submitted with the verify request.
///
/// Fields left empty fall back to the signup snapshot captured at
/// issuance time.
#[derive(Debug, Clone, Default)]
pub struct RegistrationData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegistrationData {
    /// Merge with the pending signup snapshot, preferring submitted values
    pub fn merged_with(self, pending: Option<PendingSignup>) -> Self {
        let pending = pending.unwrap_or_default();
        Self {
            name: self.name.or(pending.name),
            phone: self.phone.or(pending.phone),
            email: self.email.or(pending.email),
            password: self.password,
        }
    }
}
