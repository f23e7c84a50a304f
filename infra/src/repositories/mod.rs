//! In-memory repository implementations
//!
//! Persistence technology is an external concern of this system; the
//! in-process implementations below satisfy the repository contracts and
//! are the default wiring for development and tests.

pub mod inquiry;
pub mod package;
pub mod user;

pub use inquiry::InMemoryInquiryRepository;
pub use package::InMemoryPackageRepository;
pub use user::InMemoryUserRepository;
