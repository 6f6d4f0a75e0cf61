//! Request field checks shared by the service and API layers

/// Length of a verification code
pub const OTP_CODE_LENGTH: usize = 6;

/// Maximum length of a client-supplied verification id
pub const MAX_VERIFICATION_ID_LENGTH: usize = 128;

/// A verification code is exactly six ASCII digits
pub fn is_valid_otp_code(code: &str) -> bool {
    code.len() == OTP_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

/// Verification ids are opaque but must be non-blank and bounded
pub fn is_valid_verification_id(id: &str) -> bool {
    !id.trim().is_empty() && id.len() <= MAX_VERIFICATION_ID_LENGTH
}
