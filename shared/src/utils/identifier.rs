//! Identifier normalization
//!
//! Canonicalizes a raw phone number or email address into the stable key
//! used throughout the OTP workflow. Normalization is a pure function: the
//! same input always yields the same key, and nothing is looked up or
//! mutated along the way.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Standard local@domain.tld shape; anything fancier is rejected.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// A normalized identifier, either an E.164-style phone number or a
/// lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Phone number with leading `+` and country calling code
    Phone(String),
    /// Lowercased, trimmed email address
    Email(String),
}

/// Normalization failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("invalid phone number format")]
    InvalidPhone,

    #[error("invalid email address format")]
    InvalidEmail,
}

impl Identifier {
    /// Normalize a raw phone number or email address.
    ///
    /// Inputs containing `@` are treated as email addresses: trimmed,
    /// lowercased, and checked against a `local@domain.tld` pattern.
    ///
    /// Everything else is treated as a phone number. All non-digit
    /// characters are stripped, then:
    /// - 10 digits are prefixed with `+` and the default calling code
    /// - 12 digits already starting with the calling code gain only `+`
    /// - more than 10 digits gain `+`
    /// - anything else is rejected
    pub fn normalize(raw: &str, default_calling_code: &str) -> Result<Self, IdentifierError> {
        if raw.contains('@') {
            let email = raw.trim().to_lowercase();
            if EMAIL_REGEX.is_match(&email) {
                Ok(Identifier::Email(email))
            } else {
                Err(IdentifierError::InvalidEmail)
            }
        } else {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

            if digits.len() == 10 {
                Ok(Identifier::Phone(format!(
                    "+{}{}",
                    default_calling_code, digits
                )))
            } else if digits.len() == 12 && digits.starts_with(default_calling_code) {
                Ok(Identifier::Phone(format!("+{}", digits)))
            } else if digits.len() > 10 {
                Ok(Identifier::Phone(format!("+{}", digits)))
            } else {
                Err(IdentifierError::InvalidPhone)
            }
        }
    }

    /// The canonical key string
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Phone(s) | Identifier::Email(s) => s,
        }
    }

    /// Consume into the canonical key string
    pub fn into_string(self) -> String {
        match self {
            Identifier::Phone(s) | Identifier::Email(s) => s,
        }
    }

    /// Whether this identifier is a phone number
    pub fn is_phone(&self) -> bool {
        matches!(self, Identifier::Phone(_))
    }

    /// Whether this identifier is an email address
    pub fn is_email(&self) -> bool {
        matches!(self, Identifier::Email(_))
    }

    /// Masked form, safe for logs
    pub fn masked(&self) -> String {
        mask_identifier(self.as_str())
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mask an identifier for logging.
///
/// Phone numbers keep only their last four digits (`***3210`); email
/// addresses keep the first character of the local part (`u****@example.com`).
pub fn mask_identifier(raw: &str) -> String {
    if let Some((local, domain)) = raw.split_once('@') {
        let first = local.chars().next().unwrap_or('*');
        return format!("{}****@{}", first, domain);
    }
    if raw.len() >= 4 {
        format!("***{}", &raw[raw.len() - 4..])
    } else {
        "****".to_string()
    }
}
