//! Domain entities

pub mod inquiry;
pub mod otp_record;
pub mod package;
pub mod user;

pub use inquiry::{Inquiry, InquiryStatus};
pub use otp_record::{AttemptOutcome, OtpRecord, PendingSignup};
pub use package::{Attraction, IncludedItem, ItineraryStep, TourPackage};
pub use user::UserIdentity;
