//! Tests for the OTP workflow

mod service_tests;
