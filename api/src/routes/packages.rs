//! Tour package routes

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use tb_core::errors::{DomainError, ValidationError};
use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;

use crate::dto::package::{
    CreatePackageRequest, PackageCreatedResponse, PackageListResponse, PackageResponse,
};
use crate::handlers::{error_response, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /api/v1/packages.
///
/// All required fields missing from the request are reported together by
/// name in a single response.
pub async fn create_package<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    request: web::Json<CreatePackageRequest>,
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

    let package = match request.into_inner().into_package() {
        Ok(package) => package,
        Err(missing) => {
            let error: DomainError = ValidationError::RequiredFields {
                fields: missing.join(", "),
            }
            .into();
            return error_response(&error);
        }
    };

    match state.packages.create(package).await {
        Ok(created) => {
            log::info!("Package created: {} ({})", created.name, created.id);
            HttpResponse::Created().json(PackageCreatedResponse {
                success: true,
                message: "Package created successfully".to_string(),
                data: created,
            })
        }
        Err(error) => error_response(&error),
    }
}

/// Handler for GET /api/v1/packages
pub async fn list_packages<G, S, U, R, P, I, M>(
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
    match state.packages.find_all().await {
        Ok(packages) => HttpResponse::Ok().json(PackageListResponse {
            success: true,
            count: packages.len(),
            data: packages,
        }),
        Err(error) => error_response(&error),
    }
}

/// Handler for GET /api/v1/packages/{id}
pub async fn get_package<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
    path: web::Path<Uuid>,
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
    let id = path.into_inner();
    match state.packages.find_by_id(id).await {
        Ok(Some(package)) => HttpResponse::Ok().json(PackageResponse {
            success: true,
            data: package,
        }),
        Ok(None) => error_response(&DomainError::NotFound {
            resource: "Package".to_string(),
        }),
        Err(error) => error_response(&error),
    }
}
