//! Route handlers and shared application state

pub mod auth;
pub mod bookings;
pub mod inquiries;
pub mod packages;

use std::sync::Arc;

use tb_core::repositories::{InquiryRepository, OtpStore, PackageRepository, UserRepository};
use tb_core::services::auth::{AuthService, DeliveryGateway, RateLimiter};
use tb_core::services::booking::{BookingMailer, BookingService};

/// Application state that holds shared services
pub struct AppState<G, S, U, R, P, I, M>
where
    G: DeliveryGateway,
    S: OtpStore,
    U: UserRepository,
    R: RateLimiter,
    P: PackageRepository,
    I: InquiryRepository,
    M: BookingMailer,
{
    pub auth_service: Arc<AuthService<G, S, U>>,
    pub booking_service: Arc<BookingService<M>>,
    pub rate_limiter: Arc<R>,
    pub packages: Arc<P>,
    pub inquiries: Arc<I>,
}
