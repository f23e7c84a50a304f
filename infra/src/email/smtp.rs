//! SMTP mailer for OTP and booking confirmation emails
//!
//! When no SMTP host is configured the mailer runs in no-op mode and only
//! logs, which keeps development and tests free of email infrastructure.

use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use tb_core::domain::value_objects::BookingConfirmation;
use tb_core::services::booking::BookingMailer;
use tb_shared::utils::mask_identifier;

use crate::InfrastructureError;

/// SMTP transport configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host; empty enables no-op mode
    pub host: String,
    /// SMTP port
    pub port: u16,
    /// Optional username/password pair
    pub username: Option<String>,
    pub password: Option<String>,
    /// From mailbox, e.g. `"TrailBook" <noreply@trailbook.example>`
    pub from: String,
    /// Use STARTTLS instead of implicit TLS
    pub use_starttls: bool,
    /// Sender display name used in email bodies
    pub company_name: String,
}

impl SmtpConfig {
    /// Load from environment variables; missing host means no-op mode
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("SMTP_HOST").unwrap_or_default(),
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            username: std::env::var("SMTP_USERNAME").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
            from: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| "TrailBook <noreply@trailbook.example>".to_string()),
            use_starttls: std::env::var("SMTP_STARTTLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            company_name: std::env::var("COMPANY_NAME")
                .unwrap_or_else(|_| "TrailBook Tours".to_string()),
        }
    }
}

/// Async SMTP mailer (or no-op when unconfigured)
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Option<Arc<AsyncSmtpTransport<Tokio1Executor>>>,
    from: Mailbox,
    company_name: String,
}

impl SmtpMailer {
    /// Build the mailer from configuration
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let from = config.from.parse::<Mailbox>().map_err(|e| {
            InfrastructureError::Config(format!("Invalid SMTP_FROM address: {}", e))
        })?;

        let transport = if config.host.trim().is_empty() {
            warn!("SMTP host not configured; mailer will operate in no-op mode");
            None
        } else {
            let builder = if config.use_starttls {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            }
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to configure SMTP transport: {}", e))
            })?
            .port(config.port);

            let builder = if let (Some(username), Some(password)) =
                (&config.username, &config.password)
            {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

            Some(Arc::new(builder.build()))
        };

        Ok(Self {
            transport,
            from,
            company_name: config.company_name.clone(),
        })
    }

    /// Build from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(&SmtpConfig::from_env())
    }

    /// Whether a real transport is configured
    pub fn is_enabled(&self) -> bool {
        self.transport.is_some()
    }

    /// Send the OTP email
    pub async fn send_otp_email(
        &self,
        recipient: &str,
        code: &str,
    ) -> Result<String, InfrastructureError> {
        let subject = "Your One-Time Password (OTP)";
        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e2e8f0; border-radius: 8px;">
  <h2 style="color: #2563eb; text-align: center;">OTP Verification</h2>
  <p>Your verification code is:</p>
  <div style="background: #f8fafc; padding: 15px; text-align: center; margin: 20px 0; font-size: 24px; letter-spacing: 5px; color: #1e293b;">
    <strong>{code}</strong>
  </div>
  <p>This code will expire in <strong>5 minutes</strong>.</p>
  <p style="color: #64748b; font-size: 14px;">If you didn't request this code, please ignore this email.</p>
</div>"#
        );
        let text = format!(
            "Your verification code is: {}. Valid for 5 minutes.\n\nIf you didn't request this code, please ignore this email.",
            code
        );

        self.send_html_email(recipient, subject, &html, &text).await
    }

    /// Send an HTML email with a plain-text alternative
    async fn send_html_email(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<String, InfrastructureError> {
        let Some(transport) = &self.transport else {
            info!(
                recipient = %mask_identifier(recipient),
                subject,
                "Email service running in no-op mode; skipping actual send"
            );
            return Ok(format!("noop_{}", Uuid::new_v4()));
        };

        let to = recipient.parse::<Mailbox>().map_err(|e| {
            InfrastructureError::Email(format!("Invalid recipient email address: {}", e))
        })?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| {
                InfrastructureError::Email(format!("Failed to build email message: {}", e))
            })?;

        transport
            .send(email)
            .await
            .map_err(|e| InfrastructureError::Email(format!("Failed to send email: {}", e)))?;

        let message_id = format!("email_{}", Uuid::new_v4());
        info!(
            recipient = %mask_identifier(recipient),
            subject,
            message_id = %message_id,
            "Email sent successfully"
        );
        Ok(message_id)
    }
}

#[async_trait]
impl BookingMailer for SmtpMailer {
    async fn send_booking_confirmation(
        &self,
        confirmation: &BookingConfirmation,
    ) -> Result<String, String> {
        let subject = format!(
            "Booking Confirmation: {} (Ref: {})",
            confirmation.tour_name, confirmation.booking_reference
        );
        let date = confirmation.formatted_date();

        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
  <h2 style="color: #2563eb;">Booking Confirmed</h2>
  <p>Dear {name},</p>
  <p>Your booking for <strong>{tour}</strong> on <strong>{date}</strong> is confirmed!</p>
  <ul>
    <li>Booking Reference: <strong>{reference}</strong></li>
    <li>Participants: {participants}</li>
  </ul>
  <p>Thank you for choosing {company}!</p>
</div>"#,
            name = confirmation.customer_name,
            tour = confirmation.tour_name,
            date = date,
            reference = confirmation.booking_reference,
            participants = confirmation.participants,
            company = self.company_name,
        );
        let text = format!(
            "Dear {},\n\nYour booking for \"{}\" on {} is confirmed!\n\nBooking Reference: {}\nParticipants: {}\n\nThank you for choosing us!\n\nBest regards,\n{}",
            confirmation.customer_name,
            confirmation.tour_name,
            date,
            confirmation.booking_reference,
            confirmation.participants,
            self.company_name,
        );

        self.send_html_email(&confirmation.customer_email, &subject, &html, &text)
            .await
            .map_err(|e| e.to_string())
    }
}
