//! Mock Email Service Implementation
//!
//! Logs verification emails instead of sending them. Used in development and
//! whenever no provider is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use rb_core::services::otp::EmailServiceTrait;
use rb_shared::utils::mask_email;

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    /// Number of messages "sent"
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that fails every send
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(email = %mask_email(email), "Mock email service simulating failure");
            return Err("Mock email service failure".to_string());
        }

        let message_id = format!("mock-{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            email = %mask_email(email),
            code = code,
            message_id = %message_id,
            count = count,
            "[MOCK EMAIL] Verification code"
        );

        Ok(message_id)
    }
}
