//! Booking confirmation routes

use actix_web::{web, HttpResponse};

use tb_core::errors::{DomainError, ValidationError};
use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;
use tb_shared::types::ErrorBody;

use crate::dto::booking::{ConfirmBookingRequest, ConfirmBookingResponse};
use crate::handlers::error_response;
use crate::routes::AppState;

/// Handler for POST /api/v1/bookings/confirm.
///
/// Sends the transactional confirmation email for a booking made through
/// an external channel.
pub async fn confirm_booking<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<ConfirmBookingRequest>,
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
    let confirmation = match request.into_inner().into_confirmation() {
        Ok(confirmation) => confirmation,
        Err(missing) => {
            let error: DomainError = ValidationError::RequiredFields {
                fields: missing.join(", "),
            }
            .into();
            return error_response(&error);
        }
    };

    match state.booking_service.confirm(&confirmation).await {
        Ok(message_id) => HttpResponse::Ok().json(ConfirmBookingResponse {
            success: true,
            message: "Booking confirmation sent".to_string(),
            booking_reference: confirmation.booking_reference,
            message_id,
        }),
        // A failed send is a gateway problem, not an internal fault.
        Err(DomainError::Internal { .. }) => {
            HttpResponse::BadGateway().json(ErrorBody::new("Failed to send booking confirmation"))
        }
        Err(error) => error_response(&error),
    }
}
