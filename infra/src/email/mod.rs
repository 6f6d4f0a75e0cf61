//! Email Service Module
//!
//! Delivery of verification codes by email.
//!
//! ## Features
//!
//! - **Mock Implementation**: logs the message for development
//! - **HTTP Provider**: JSON-over-HTTPS transactional email API with retries
//! - **Security**: addresses masked in logs

use std::sync::Arc;

use rb_core::services::otp::EmailServiceTrait;
use rb_shared::config::{EmailConfig, EmailProvider};

pub mod http_email;
pub mod message;
pub mod mock_email;

pub use http_email::HttpEmailService;
pub use message::VerificationEmail;
pub use mock_email::MockEmailService;

#[cfg(test)]
mod tests;

/// Create the email service selected by configuration
///
/// An HTTP provider that cannot be initialised falls back to the mock
/// implementation so the service still starts.
pub fn create_email_service(config: &EmailConfig, expiry_seconds: i64) -> Arc<dyn EmailServiceTrait> {
    match config.provider {
        EmailProvider::Mock => Arc::new(MockEmailService::new()),
        EmailProvider::Http => match HttpEmailService::new(config.clone(), expiry_seconds) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Arc::new(MockEmailService::new())
            }
        },
    }
}
