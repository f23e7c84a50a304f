//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;
use tb_shared::utils::mask_identifier;

use crate::dto::auth::{LoginRequest, LoginResponse, UserDto};
use crate::handlers::{error_response, validation_error_response};
use crate::routes::AppState;

/// Authenticate a returning user with email and password
pub async fn login<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<LoginRequest>,
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

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(LoginResponse {
            success: true,
            user: UserDto::from(&user),
        }),
        Err(error) => {
            log::warn!(
                "Login failed for {}: {}",
                mask_identifier(&request.email),
                error
            );
            error_response(&error)
        }
    }
}
