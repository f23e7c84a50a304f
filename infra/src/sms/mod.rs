//! SMS delivery services

pub mod mock_sms;
pub mod sms_service;
pub mod twilio;

pub use mock_sms::MockSmsService;
pub use sms_service::{is_valid_phone_number, SmsService};
pub use twilio::{TwilioConfig, TwilioSmsService};
