//! Traits for the email and storage collaborators

use async_trait::async_trait;

use crate::domain::entities::OtpEntry;
use crate::errors::DomainResult;

/// Trait for email delivery integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code, returning the provider's message id
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}

/// Storage for outstanding verification codes
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Generate and store a new code for the pair, replacing any previous one
    async fn issue(&self, email: &str, verification_id: &str) -> DomainResult<OtpEntry>;

    /// Check a submitted code.
    ///
    /// Fails with `OtpError::NotFound`, `Expired`, `TooManyAttempts` or
    /// `Mismatch`. Success and every failure except `Mismatch` remove the
    /// entry; a mismatch records the attempt.
    async fn verify(&self, email: &str, verification_id: &str, code: &str) -> DomainResult<()>;

    /// Remove every expired entry, returning how many were removed
    async fn sweep(&self) -> DomainResult<usize>;

    /// Look at an entry without touching it
    async fn peek(&self, email: &str, verification_id: &str) -> DomainResult<Option<OtpEntry>>;
}
