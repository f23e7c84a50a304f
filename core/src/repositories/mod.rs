//! Repository trait seams between the domain and infrastructure layers

pub mod inquiry_repository;
pub mod otp_store;
pub mod package_repository;
pub mod user_repository;

pub use inquiry_repository::InquiryRepository;
pub use otp_store::{ConsumeOutcome, OtpStore};
pub use package_repository::PackageRepository;
pub use user_repository::UserRepository;
