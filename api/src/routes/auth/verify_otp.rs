//! Handler for POST /api/v1/auth/verify-otp

use actix_web::{web, HttpResponse};
use validator::Validate;

use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter, RegistrationData};
use tb_core::services::booking::BookingMailer;
use tb_shared::types::ErrorBody;
use tb_shared::utils::mask_identifier;

use crate::dto::auth::{UserDto, VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{error_response, validation_error_response};
use crate::routes::AppState;

/// Verify a submitted code and provision the user.
///
/// Registration data in the request overrides the snapshot captured at
/// issuance; fields left out fall back to that snapshot.
pub async fn verify_otp<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    G: DeliveryGateway + 'static,
    S: OtpStore + 'static,
    U: UserRepository + 'static,
    R: RateLimiter + 'static,
    P: PackageRepository + 'static,
    I: InquiryRepository + 'static,
    M: BookingMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    let Some(identifier) = request.identifier() else {
        return HttpResponse::BadRequest().json(ErrorBody::new("Phone or email is required"));
    };

    let registration = RegistrationData {
        name: request.name.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
    };

    match state
        .auth_service
        .verify_code(identifier, &request.otp, registration)
        .await
    {
        Ok(verified) => {
            log::info!(
                "OTP verified for {} (user: {})",
                mask_identifier(identifier),
                verified.user.id
            );
            HttpResponse::Ok().json(VerifyOtpResponse {
                success: true,
                message: "OTP verified successfully".to_string(),
                user: UserDto::from(&verified.user),
                is_new_user: verified.is_new_user,
            })
        }
        Err(error) => {
            log::warn!(
                "OTP verification failed for {}: {}",
                mask_identifier(identifier),
                error
            );
            error_response(&error)
        }
    }
}
