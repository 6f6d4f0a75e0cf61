//! Unit tests for domain error types

use super::*;

#[test]
fn test_otp_error_bridges_into_domain_error() {
    let error: DomainError = OtpError::Expired.into();
    assert!(matches!(error, DomainError::Otp(OtpError::Expired)));
    assert!(error.to_string().contains("expired"));
}

#[test]
fn test_only_mismatch_retains_entry() {
    assert!(OtpError::Mismatch { attempts: 1 }.retains_entry());
    assert!(!OtpError::NotFound.retains_entry());
    assert!(!OtpError::Expired.retains_entry());
    assert!(!OtpError::TooManyAttempts.retains_entry());
}

#[test]
fn test_error_codes_align_with_shared_codes() {
    use rb_shared::error_codes;

    assert_eq!(OtpError::NotFound.code(), error_codes::VERIFICATION_CODE_NOT_FOUND);
    assert_eq!(OtpError::Expired.code(), error_codes::VERIFICATION_CODE_EXPIRED);
    assert_eq!(OtpError::TooManyAttempts.code(), error_codes::TOO_MANY_ATTEMPTS);
    assert_eq!(
        OtpError::Mismatch { attempts: 2 }.code(),
        error_codes::VERIFICATION_CODE_INVALID
    );
}

#[test]
fn test_validation_shorthand() {
    let error = DomainError::validation("Invalid email address");
    assert_eq!(error.to_string(), "Validation error: Invalid email address");
}
