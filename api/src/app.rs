//! Application factory
//!
//! Builds the Actix application with all routes, middleware and shared
//! state. `main` wires concrete infrastructure into the generic state;
//! tests substitute in-memory collaborators through the same factory.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::{web, App, Error, HttpResponse};

use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{DeliveryGateway, RateLimiter};
use tb_core::services::booking::BookingMailer;
use tb_shared::types::ErrorBody;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, send_otp, verify_otp};
use crate::routes::{bookings, inquiries, packages, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<G, S, U, R, P, I, M>(
    state: web::Data<AppState<G, S, U, R, P, I, M>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    G: DeliveryGateway + 'static,
    S: OtpStore + 'static,
    U: UserRepository + 'static,
    R: RateLimiter + 'static,
    P: PackageRepository + 'static,
    I: InquiryRepository + 'static,
    M: BookingMailer + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/send-otp", web::post().to(send_otp::<G, S, U, R, P, I, M>))
                        .route(
                            "/verify-otp",
                            web::post().to(verify_otp::<G, S, U, R, P, I, M>),
                        )
                        .route("/login", web::post().to(login::<G, S, U, R, P, I, M>)),
                )
                .service(
                    web::scope("/packages")
                        .route(
                            "",
                            web::post().to(packages::create_package::<G, S, U, R, P, I, M>),
                        )
                        .route(
                            "",
                            web::get().to(packages::list_packages::<G, S, U, R, P, I, M>),
                        )
                        .route(
                            "/{id}",
                            web::get().to(packages::get_package::<G, S, U, R, P, I, M>),
                        ),
                )
                .service(
                    web::scope("/inquiries")
                        .route(
                            "",
                            web::post().to(inquiries::create_inquiry::<G, S, U, R, P, I, M>),
                        )
                        .route(
                            "",
                            web::get().to(inquiries::list_inquiries::<G, S, U, R, P, I, M>),
                        ),
                )
                .service(web::scope("/bookings").route(
                    "/confirm",
                    web::post().to(bookings::confirm_booking::<G, S, U, R, P, I, M>),
                )),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "trailbook-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("The requested resource was not found"))
}
