//! Request and response data transfer objects

pub mod auth;
pub mod booking;
pub mod inquiry;
pub mod package;
