//! Main authentication service implementation

use std::sync::Arc;
use std::time::Duration;

use tb_shared::utils::{mask_identifier, Identifier};
use tokio::time::timeout;

use crate::domain::entities::otp_record::{OtpRecord, PendingSignup, CODE_LENGTH};
use crate::domain::entities::user::UserIdentity;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{ConsumeOutcome, OtpStore, UserRepository};

use super::config::AuthServiceConfig;
use super::traits::DeliveryGateway;
use super::types::{IssueResult, RegistrationData, VerifiedUser};

/// Authentication service for the complete OTP signup and login flow
pub struct AuthService<G, S, U>
where
    G: DeliveryGateway,
    S: OtpStore,
    U: UserRepository,
{
    /// Delivery gateway for sending codes via SMS or email
    gateway: Arc<G>,
    /// OTP store holding live records
    store: Arc<S>,
    /// User repository for provisioning and login
    users: Arc<U>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<G, S, U> AuthService<G, S, U>
where
    G: DeliveryGateway,
    S: OtpStore,
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(gateway: Arc<G>, store: Arc<S>, users: Arc<U>, config: AuthServiceConfig) -> Self {
        Self {
            gateway,
            store,
            users,
            config,
        }
    }

    /// Issue a verification code for a phone number or email address.
    ///
    /// 1. Normalizes the identifier
    /// 2. Rejects the request while a live code exists (cooldown)
    /// 3. Generates and stores a fresh record with the signup snapshot
    /// 4. Sends the code through the delivery gateway, bounded by the
    ///    configured timeout
    ///
    /// On delivery failure the stored record is rolled back so the client
    /// can retry issuance immediately instead of waiting out the cooldown.
    pub async fn issue_code(
        &self,
        raw_identifier: &str,
        signup: Option<PendingSignup>,
    ) -> DomainResult<IssueResult> {
        let identifier = self.normalize(raw_identifier)?;

        if let Some(existing) = self.store.get(identifier.as_str()).await? {
            if !existing.is_expired() {
                let retry_after_seconds = existing.seconds_until_expiry();
                tracing::warn!(
                    identifier = %identifier.masked(),
                    retry_after = retry_after_seconds,
                    event = "otp_cooldown_active",
                    "Rejected issuance while a live code exists"
                );
                return Err(AuthError::CooldownActive {
                    retry_after_seconds,
                }
                .into());
            }
            // Expired leftovers are simply overwritten below.
        }

        let record = OtpRecord::with_policy(
            identifier.as_str().to_string(),
            signup,
            self.config.code_ttl_minutes,
            self.config.max_attempts,
        );
        let code = record.code.clone();
        let expires_at = record.expires_at;

        self.store.put(record).await?;

        tracing::info!(
            identifier = %identifier.masked(),
            event = "otp_issued",
            "Generated and stored new verification code"
        );

        let delivery = timeout(
            Duration::from_secs(self.config.delivery_timeout_secs),
            self.gateway.send_code(&identifier, &code),
        )
        .await;

        let message_id = match delivery {
            Ok(Ok(message_id)) => message_id,
            Ok(Err(error)) => {
                self.roll_back(&identifier).await;
                tracing::error!(
                    identifier = %identifier.masked(),
                    error = %error,
                    event = "otp_delivery_failed",
                    "Delivery gateway rejected the send"
                );
                return Err(AuthError::DeliveryFailed.into());
            }
            Err(_) => {
                self.roll_back(&identifier).await;
                tracing::error!(
                    identifier = %identifier.masked(),
                    timeout_secs = self.config.delivery_timeout_secs,
                    event = "otp_delivery_timeout",
                    "Delivery gateway call timed out"
                );
                return Err(AuthError::DeliveryFailed.into());
            }
        };

        Ok(IssueResult {
            message_id,
            expires_at,
            resend_after: (self.config.code_ttl_minutes * 60).max(0) as u64,
            debug_code: self.config.expose_debug_code.then_some(code),
        })
    }

    /// Verify a submitted code and provision the user.
    ///
    /// The store applies the whole attempt atomically; this method maps
    /// the outcome onto the error taxonomy and, on a match, hands off to
    /// provisioning. A consumed code is gone regardless of whether
    /// provisioning succeeds, so a code can never be replayed.
    pub async fn verify_code(
        &self,
        raw_identifier: &str,
        submitted: &str,
        registration: RegistrationData,
    ) -> DomainResult<VerifiedUser> {
        let identifier = self.normalize(raw_identifier)?;

        if submitted.len() != CODE_LENGTH || !submitted.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "otp".to_string(),
            }
            .into());
        }

        match self.store.consume(identifier.as_str(), submitted).await? {
            ConsumeOutcome::Missing => {
                tracing::warn!(
                    identifier = %identifier.masked(),
                    event = "otp_not_found",
                    "No live code for identifier"
                );
                Err(AuthError::NotFoundOrExpired.into())
            }
            ConsumeOutcome::Exhausted => {
                tracing::warn!(
                    identifier = %identifier.masked(),
                    event = "otp_attempts_exhausted",
                    "Attempt cap reached; record consumed"
                );
                Err(AuthError::AttemptsExhausted.into())
            }
            ConsumeOutcome::Expired => {
                tracing::warn!(
                    identifier = %identifier.masked(),
                    event = "otp_expired",
                    "Code past expiry; record consumed"
                );
                Err(AuthError::Expired.into())
            }
            ConsumeOutcome::Mismatch { attempts_left } => {
                tracing::warn!(
                    identifier = %identifier.masked(),
                    attempts_left,
                    event = "otp_mismatch",
                    "Wrong code submitted"
                );
                Err(AuthError::InvalidCode { attempts_left }.into())
            }
            ConsumeOutcome::Matched(record) => {
                tracing::info!(
                    identifier = %identifier.masked(),
                    event = "otp_verified",
                    "Code verified; record consumed"
                );
                self.provision(&identifier, record.pending, registration)
                    .await
            }
        }
    }

    /// Authenticate with email and password.
    ///
    /// The failure is uniform whether the user is unknown, has no
    /// password, or the password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<UserIdentity> {
        let email = email.trim().to_lowercase();

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let hash = user
            .password_hash
            .as_deref()
            .ok_or(AuthError::AuthenticationFailed)?;

        let matches = bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password hash: {}", e),
        })?;

        if !matches {
            tracing::warn!(
                identifier = %mask_identifier(&email),
                event = "login_failed",
                "Password mismatch"
            );
            return Err(AuthError::AuthenticationFailed.into());
        }

        tracing::info!(
            identifier = %mask_identifier(&email),
            event = "login_success",
            "Password login succeeded"
        );
        Ok(user)
    }

    /// Create the user record for a verified identity.
    ///
    /// Registration is rejected when a user already holds the phone or
    /// email; the separate login endpoint covers returning users. A
    /// unique-constraint race inside `create` surfaces as `DuplicateKey`.
    async fn provision(
        &self,
        identifier: &Identifier,
        pending: Option<PendingSignup>,
        registration: RegistrationData,
    ) -> DomainResult<VerifiedUser> {
        let merged = registration.merged_with(pending);
        let (phone, email) = self.contact_fields(identifier, &merged);

        if self
            .users
            .find_by_phone_or_email(phone.as_deref(), email.as_deref())
            .await?
            .is_some()
        {
            tracing::warn!(
                identifier = %identifier.masked(),
                event = "registration_rejected",
                "Identity already registered"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = match merged.password {
            Some(password) => Some(bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(
                |e| DomainError::Internal {
                    message: format!("Failed to hash password: {}", e),
                },
            )?),
            None => None,
        };

        let user = UserIdentity::new(merged.name, phone, email, password_hash);
        let created = self.users.create(user).await?;

        tracing::info!(
            identifier = %identifier.masked(),
            user_id = %created.id,
            event = "user_registered",
            "Provisioned new user after verification"
        );

        Ok(VerifiedUser {
            user: created,
            is_new_user: true,
        })
    }

    /// Resolve the stored phone/email pair for a new user.
    ///
    /// The verified identifier always wins its slot; the other contact
    /// field is taken from the merged registration data, normalized when
    /// possible and dropped otherwise.
    fn contact_fields(
        &self,
        identifier: &Identifier,
        merged: &RegistrationData,
    ) -> (Option<String>, Option<String>) {
        match identifier {
            Identifier::Phone(phone) => {
                let email = merged
                    .email
                    .as_deref()
                    .map(|e| e.trim().to_lowercase())
                    .filter(|e| !e.is_empty());
                (Some(phone.clone()), email)
            }
            Identifier::Email(email) => {
                let phone = merged.phone.as_deref().and_then(|raw| {
                    Identifier::normalize(raw, &self.config.default_calling_code)
                        .ok()
                        .filter(Identifier::is_phone)
                        .map(Identifier::into_string)
                });
                (phone, Some(email.clone()))
            }
        }
    }

    fn normalize(&self, raw: &str) -> DomainResult<Identifier> {
        Identifier::normalize(raw, &self.config.default_calling_code).map_err(|_| {
            tracing::warn!(
                identifier = %mask_identifier(raw),
                event = "invalid_identifier",
                "Failed to normalize identifier"
            );
            AuthError::InvalidIdentifier.into()
        })
    }

    /// Best-effort rollback of a stored record after delivery failure
    async fn roll_back(&self, identifier: &Identifier) {
        if let Err(e) = self.store.delete(identifier.as_str()).await {
            tracing::error!(
                identifier = %identifier.masked(),
                error = %e,
                "Failed to roll back OTP record after delivery failure"
            );
        }
    }
}
