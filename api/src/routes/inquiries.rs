//! Customer inquiry routes

use actix_web::{web, HttpResponse};
use validator::Validate;

use tb_core::domain::entities::inquiry::Inquiry;
use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;

use crate::dto::inquiry::{CreateInquiryRequest, InquiryCreatedResponse, InquiryListResponse};
use crate::handlers::{error_response, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/inquiries
pub async fn create_inquiry<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<CreateInquiryRequest>,
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

    let request = request.into_inner();
    let inquiry = Inquiry::new(
        request.name,
        request.email,
        request.phone,
        request.message,
        request.package,
    );

    match state.inquiries.create(inquiry).await {
        Ok(created) => {
            log::info!("Inquiry received: {}", created.id);
            HttpResponse::Created().json(InquiryCreatedResponse {
                success: true,
                message: "Inquiry submitted successfully".to_string(),
                data: created,
            })
        }
        Err(error) => error_response(&error),
    }
}

/// Handler for GET /api/v1/inquiries
pub async fn list_inquiries<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
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
    match state.inquiries.find_all().await {
        Ok(inquiries) => HttpResponse::Ok().json(InquiryListResponse {
            success: true,
            count: inquiries.len(),
            data: inquiries,
        }),
        Err(error) => error_response(&error),
    }
}
