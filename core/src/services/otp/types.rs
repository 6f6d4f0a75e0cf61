//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Address the code went to
    pub email: String,
    /// Flow the code belongs to
    pub verification_id: String,
    /// The email provider's message id
    pub message_id: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}
