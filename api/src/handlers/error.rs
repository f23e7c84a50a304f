//! Domain error to HTTP response mapping
//!
//! Every domain error is recovered here and turned into the shared
//! `ErrorBody` envelope; nothing is fatal to the process. Internal errors
//! keep their detail out of production responses.

use actix_web::HttpResponse;

use tb_core::errors::{AuthError, DomainError};
use tb_shared::config::Environment;
use tb_shared::types::ErrorBody;

/// Map a domain error to its HTTP response
pub fn error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),

        DomainError::ValidationErr(validation) => {
            HttpResponse::BadRequest().json(ErrorBody::new(validation.to_string()))
        }

        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorBody::new(message.clone()))
        }

        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorBody::new(format!("{} not found", resource)))
        }

        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            let body = if Environment::from_env().is_production() {
                ErrorBody::new("Something went wrong!")
            } else {
                ErrorBody::new("Something went wrong!").with_details(message.clone())
            };
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Map request DTO validation failures to a 400 naming the offending fields
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    HttpResponse::BadRequest().json(ErrorBody::new(format!(
        "Invalid value for: {}",
        fields.join(", ")
    )))
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::InvalidIdentifier
        | AuthError::NotFoundOrExpired
        | AuthError::Expired => HttpResponse::BadRequest().json(ErrorBody::new(message)),

        AuthError::InvalidCode { attempts_left } => HttpResponse::BadRequest()
            .json(ErrorBody::new(message).with_attempts_left(*attempts_left)),

        AuthError::CooldownActive {
            retry_after_seconds,
        } => HttpResponse::TooManyRequests()
            .json(ErrorBody::new(message).with_retry_after(*retry_after_seconds)),

        AuthError::AttemptsExhausted => {
            HttpResponse::TooManyRequests().json(ErrorBody::new(message))
        }

        AuthError::UserAlreadyExists | AuthError::DuplicateKey { .. } => {
            HttpResponse::Conflict().json(ErrorBody::new(message))
        }

        AuthError::DeliveryFailed => {
            HttpResponse::BadGateway().json(ErrorBody::new(message))
        }

        AuthError::AuthenticationFailed => {
            HttpResponse::Unauthorized().json(ErrorBody::new(message))
        }
    }
}
