//! One-time passcode policy

use serde::{Deserialize, Serialize};

/// Lifetime of an issued code in seconds
pub const DEFAULT_EXPIRY_SECONDS: i64 = 100;

/// Failed checks allowed before a code is discarded
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Interval between background sweeps of the in-memory store
pub const DEFAULT_SWEEP_INTERVAL_SECONDS: u64 = 300;

/// OTP issuance and verification policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds after issuance at which a code expires
    #[serde(default = "default_expiry_seconds")]
    pub expiry_seconds: i64,

    /// Number of failed checks that exhausts a code
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds between background sweeps
    #[serde(default = "default_sweep_interval_seconds")]
    pub sweep_interval_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            sweep_interval_seconds: DEFAULT_SWEEP_INTERVAL_SECONDS,
        }
    }
}

fn default_expiry_seconds() -> i64 {
    DEFAULT_EXPIRY_SECONDS
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_sweep_interval_seconds() -> u64 {
    DEFAULT_SWEEP_INTERVAL_SECONDS
}
