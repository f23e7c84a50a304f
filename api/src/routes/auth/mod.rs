//! Authentication routes

pub mod login;
pub mod send_otp;
pub mod verify_otp;

pub use login::login;
pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
