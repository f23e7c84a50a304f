use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tb_core::domain::entities::user::UserIdentity;

/// Request body for POST /api/v1/auth/send-otp.
///
/// Either `phone` or `email` identifies the recipient; the remaining
/// fields are snapshotted for registration at verification time.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// 10-digit local number, or any international format
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,

    /// Email address, used when no phone is given
    #[validate(length(min = 3, max = 254))]
    pub email: Option<String>,

    /// Display name captured for signup
    #[validate(length(max = 100))]
    pub name: Option<String>,
}

impl SendOtpRequest {
    /// The identifier the code goes to: phone wins over email
    pub fn identifier(&self) -> Option<&str> {
        self.phone.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,

    /// Seconds until the issued code expires
    pub expires_in: u64,

    /// Seconds until a new code may be requested
    pub resend_after: u64,

    /// Raw code, surfaced only in non-production configurations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugOtp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DebugOtp {
    pub otp: String,
}

/// Request body for POST /api/v1/auth/verify-otp
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 3, max = 254))]
    pub email: Option<String>,

    /// 6-digit verification code
    #[validate(length(equal = 6))]
    pub otp: String,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    /// Optional signup password
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
}

impl VerifyOtpRequest {
    /// The identifier being verified: phone wins over email
    pub fn identifier(&self) -> Option<&str> {
        self.phone.as_deref().or(self.email.as_deref())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub user: UserDto,
    pub is_new_user: bool,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserDto,
}

/// User profile returned by auth endpoints; never carries the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: uuid::Uuid,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&UserIdentity> for UserDto {
    fn from(user: &UserIdentity) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            phone: user.phone.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
