//! TrailBook API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use dotenvy::dotenv;
use log::info;

use tb_api::app::create_app;
use tb_api::routes::AppState;
use tb_core::services::auth::{AuthService, AuthServiceConfig};
use tb_core::services::booking::BookingService;
use tb_infra::cache::InMemoryOtpStore;
use tb_infra::delivery::OtpDeliveryService;
use tb_infra::email::SmtpMailer;
use tb_infra::rate_limit::InMemoryRateLimiter;
use tb_infra::repositories::{
    InMemoryInquiryRepository, InMemoryPackageRepository, InMemoryUserRepository,
};
use tb_infra::sms::{MockSmsService, SmsService, TwilioSmsService};
use tb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting TrailBook API server ({:?} environment)",
        config.environment
    );

    // SMS provider: Twilio when credentials are configured, otherwise the
    // logging mock. Production refuses to start without Twilio.
    let sms: Arc<dyn SmsService> = match TwilioSmsService::from_env() {
        Ok(twilio) => Arc::new(twilio),
        Err(error) => {
            if config.environment.is_production() {
                bail!("Twilio configuration missing in production: {}", error);
            }
            info!("Twilio not configured; using mock SMS service");
            Arc::new(MockSmsService::new())
        }
    };

    // Mailer runs in no-op mode when SMTP_HOST is unset
    let mailer =
        Arc::new(SmtpMailer::from_env().context("failed to configure the SMTP mailer")?);

    let gateway = Arc::new(OtpDeliveryService::new(sms, mailer.clone()));
    let store = Arc::new(InMemoryOtpStore::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            gateway,
            store,
            users,
            AuthServiceConfig::from(&config.otp),
        )),
        booking_service: Arc::new(BookingService::new(mailer)),
        rate_limiter: Arc::new(InMemoryRateLimiter::from_config(&config.rate_limit)),
        packages: Arc::new(InMemoryPackageRepository::new()),
        inquiries: Arc::new(InMemoryInquiryRepository::new()),
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
