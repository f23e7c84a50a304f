//! Tests for OTP storage
