//! Handler for POST /api/v1/auth/send-otp

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use tb_core::domain::entities::otp_record::PendingSignup;
use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;
use tb_shared::types::ErrorBody;
use tb_shared::utils::mask_identifier;

use crate::dto::auth::{DebugOtp, SendOtpRequest, SendOtpResponse};
use crate::handlers::{error_response, validation_error_response};
use crate::routes::AppState;

/// Issue a verification code for a phone number or email address.
///
/// The per-IP rate limit is enforced here, before the OTP workflow runs;
/// cooldown enforcement for the individual identifier lives in the
/// service itself.
pub async fn send_otp<G, S, U, R, P, I, M>(
    req: HttpRequest,
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<SendOtpRequest>,
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

    let client_ip = extract_client_ip(&req);
    match state.rate_limiter.try_acquire(&client_ip).await {
        Ok(None) => {}
        Ok(Some(retry_after)) => {
            log::warn!(
                "Rate limit exceeded for ip {} requesting OTP for {}",
                client_ip,
                mask_identifier(identifier)
            );
            return HttpResponse::TooManyRequests().json(
                ErrorBody::new("Too many OTP requests. Please try again later")
                    .with_retry_after(retry_after),
            );
        }
        Err(error) => return error_response(&error),
    }

    let signup = PendingSignup {
        name: request.name.clone(),
        phone: request.phone.clone(),
        email: request.email.clone(),
    };

    match state.auth_service.issue_code(identifier, Some(signup)).await {
        Ok(result) => {
            let expires_in = (result.expires_at - chrono::Utc::now())
                .num_seconds()
                .max(0) as u64;
            log::info!(
                "OTP issued for {} (message_id: {})",
                mask_identifier(identifier),
                result.message_id
            );
            HttpResponse::Ok().json(SendOtpResponse {
                success: true,
                message: "OTP sent successfully".to_string(),
                expires_in,
                resend_after: result.resend_after,
                debug: result.debug_code.map(|otp| DebugOtp { otp }),
            })
        }
        Err(error) => {
            log::warn!(
                "Failed to issue OTP for {}: {}",
                mask_identifier(identifier),
                error
            );
            error_response(&error)
        }
    }
}

/// Client IP for rate limiting: X-Forwarded-For wins behind a proxy, then
/// X-Real-IP, then the peer address
pub(crate) fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("X-Forwarded-For") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(ip) = value.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(value) = real_ip.to_str() {
            return value.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
