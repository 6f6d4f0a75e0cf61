//! Main OTP service implementation

use std::sync::Arc;

use rb_shared::config::OtpConfig;
use rb_shared::utils::{is_valid_email, is_valid_otp_code, is_valid_verification_id, mask_email};

use crate::errors::{DomainError, DomainResult};

use super::traits::{EmailServiceTrait, OtpStore};
use super::types::SendCodeResult;

/// Email verification workflow over an injected store and email sender
pub struct OtpService<E: EmailServiceTrait + ?Sized, S: OtpStore + ?Sized> {
    /// Email service for delivering codes
    email_service: Arc<E>,
    /// Store for outstanding codes
    store: Arc<S>,
    /// Expiry and attempt policy
    config: OtpConfig,
}

impl<E: EmailServiceTrait + ?Sized, S: OtpStore + ?Sized> OtpService<E, S> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `email_service` - Email delivery implementation
    /// * `store` - OTP store implementation
    /// * `config` - Policy the store was built with, used for reporting expiry
    pub fn new(email_service: Arc<E>, store: Arc<S>, config: OtpConfig) -> Self {
        Self {
            email_service,
            store,
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Issue a verification code and email it.
    ///
    /// Any earlier code for the same (email, verification id) pair stops being
    /// valid. If delivery fails the new entry is left in place and expires on
    /// its own.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Delivery details and the expiry instant
    /// * `Err(DomainError::Validation)` - Malformed email or verification id
    /// * `Err(DomainError::EmailDelivery)` - The email provider refused the message
    pub async fn send_code(&self, email: &str, verification_id: &str) -> DomainResult<SendCodeResult> {
        let email = email.trim();

        if !is_valid_email(email) {
            return Err(DomainError::validation("Invalid email address"));
        }
        if !is_valid_verification_id(verification_id) {
            return Err(DomainError::validation("Invalid verification id"));
        }

        let entry = self.store.issue(email, verification_id).await?;

        tracing::info!(
            email = %mask_email(email),
            verification_id = verification_id,
            event = "otp_issued",
            "Issued verification code"
        );

        let message_id = self
            .email_service
            .send_verification_code(email, &entry.code)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "otp_email_failed",
                    "Failed to email verification code"
                );
                DomainError::EmailDelivery { message: e }
            })?;

        Ok(SendCodeResult {
            email: email.to_string(),
            verification_id: verification_id.to_string(),
            message_id,
            expires_at: entry.expires_at(self.config.expiry_seconds),
        })
    }

    /// Check a submitted code.
    ///
    /// Codes that are not exactly six digits are rejected before the store is
    /// consulted, so they never count as an attempt.
    pub async fn verify_code(&self, email: &str, verification_id: &str, code: &str) -> DomainResult<()> {
        let email = email.trim();

        if !is_valid_otp_code(code) {
            tracing::warn!(
                email = %mask_email(email),
                code_length = code.len(),
                event = "invalid_code_format",
                "Invalid verification code format provided"
            );
            return Err(DomainError::validation("Verification code must be 6 digits"));
        }

        match self.store.verify(email, verification_id, code).await {
            Ok(()) => {
                tracing::info!(
                    email = %mask_email(email),
                    verification_id = verification_id,
                    event = "otp_verified",
                    "Verification code accepted"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    email = %mask_email(email),
                    verification_id = verification_id,
                    error = %e,
                    event = "otp_verify_failed",
                    "Verification code rejected"
                );
                Err(e)
            }
        }
    }
}
