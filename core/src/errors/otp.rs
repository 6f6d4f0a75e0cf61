//! Verification code failures

use thiserror::Error;

/// Why a submitted verification code was rejected
///
/// Every variant is terminal for the code except `Mismatch`, which records the
/// failed attempt and keeps the code alive until the attempt limit is reached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("No verification code found. Please request a new code")]
    NotFound,

    #[error("Verification code expired. Please request a new code")]
    Expired,

    #[error("Too many failed attempts. Please request a new code")]
    TooManyAttempts,

    #[error("Invalid verification code")]
    Mismatch { attempts: u32 },
}

impl OtpError {
    /// Whether the stored entry survives this failure
    pub fn retains_entry(&self) -> bool {
        matches!(self, OtpError::Mismatch { .. })
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            OtpError::NotFound => "VERIFICATION_CODE_NOT_FOUND",
            OtpError::Expired => "VERIFICATION_CODE_EXPIRED",
            OtpError::TooManyAttempts => "TOO_MANY_ATTEMPTS",
            OtpError::Mismatch { .. } => "VERIFICATION_CODE_INVALID",
        }
    }
}
