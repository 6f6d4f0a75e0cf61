//! Outstanding email verification code.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

use rb_shared::config::OtpConfig;

use crate::errors::OtpError;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code value; codes never carry a leading zero
const CODE_MIN: u32 = 100_000;

/// Largest code value
const CODE_MAX: u32 = 999_999;

/// One outstanding verification attempt for an (email, verification id) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// The 6-digit code sent to the user
    pub code: String,

    /// Address the code was sent to
    pub email: String,

    /// Client-chosen id distinguishing concurrent flows for one address
    pub verification_id: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// Failed checks recorded against this code
    pub attempts: u32,
}

impl OtpEntry {
    /// Creates a fresh entry with a random code issued at `issued_at`
    pub fn new(
        email: impl Into<String>,
        verification_id: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code: Self::generate_code(),
            email: email.into(),
            verification_id: verification_id.into(),
            issued_at,
            attempts: 0,
        }
    }

    /// Composite key under which an entry is stored
    pub fn key(email: &str, verification_id: &str) -> String {
        format!("{}_{}", email, verification_id)
    }

    /// Key of this entry
    pub fn storage_key(&self) -> String {
        Self::key(&self.email, &self.verification_id)
    }

    /// Uniform over 100000..=999999
    pub fn generate_code() -> String {
        rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX).to_string()
    }

    /// Instant after which the entry is expired
    pub fn expires_at(&self, expiry_seconds: i64) -> DateTime<Utc> {
        self.issued_at + Duration::seconds(expiry_seconds)
    }

    /// Expired once strictly more than `expiry_seconds` have passed
    pub fn is_expired_at(&self, now: DateTime<Utc>, expiry_seconds: i64) -> bool {
        now - self.issued_at > Duration::seconds(expiry_seconds)
    }

    /// Checks a submitted code against this entry.
    ///
    /// Order matters: expiry is checked before the attempt limit, and the
    /// attempt limit before the comparison. A mismatch increments `attempts`
    /// in place; callers persist the entry only when the returned error
    /// [`retains_entry`](OtpError::retains_entry), and delete it otherwise.
    pub fn check(
        &mut self,
        submitted: &str,
        now: DateTime<Utc>,
        policy: &OtpConfig,
    ) -> Result<(), OtpError> {
        if self.is_expired_at(now, policy.expiry_seconds) {
            return Err(OtpError::Expired);
        }

        if self.attempts >= policy.max_attempts {
            return Err(OtpError::TooManyAttempts);
        }

        if !constant_time_eq(self.code.as_bytes(), submitted.as_bytes()) {
            self.attempts += 1;
            return Err(OtpError::Mismatch {
                attempts: self.attempts,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/otp_entry_tests.rs"]
mod tests;
