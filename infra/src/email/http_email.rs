//! HTTP Email Service Implementation
//!
//! Sends verification emails through a JSON transactional email API
//! (`POST {api_url}` with a bearer token, replying `{"id": "..."}`).
//!
//! Transient failures (429 and 5xx responses, connection errors) are retried
//! with exponential backoff; other client errors fail immediately.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use rb_core::services::otp::EmailServiceTrait;
use rb_shared::config::EmailConfig;
use rb_shared::utils::mask_email;

use super::message::VerificationEmail;
use crate::InfrastructureError;

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Email service backed by an HTTP provider
pub struct HttpEmailService {
    client: Client,
    config: EmailConfig,
    expiry_seconds: i64,
}

impl HttpEmailService {
    /// Create a new HTTP email service
    ///
    /// `expiry_seconds` is quoted in the message body.
    pub fn new(config: EmailConfig, expiry_seconds: i64) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config("email.api_key is not set".to_string()));
        }
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config("email.api_url is not set".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            api_url = %config.api_url,
            from = %config.from_address,
            "HTTP email service initialized"
        );

        Ok(Self {
            client,
            config,
            expiry_seconds,
        })
    }

    /// Build the message for a code
    pub fn message(&self, to: &str, code: &str) -> VerificationEmail {
        VerificationEmail::new(
            &self.config.from_address,
            to,
            &self.config.subject,
            code,
            self.expiry_seconds,
        )
    }

    async fn send_once(&self, message: &VerificationEmail) -> Result<String, (bool, InfrastructureError)> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| (true, InfrastructureError::Http(e)))?;

        let status = response.status();
        if status.is_success() {
            let body: SendResponse = response
                .json()
                .await
                .map_err(|e| (false, InfrastructureError::Http(e)))?;
            return Ok(body.id);
        }

        let detail = response.text().await.unwrap_or_default();
        Err((
            is_retryable_status(status),
            InfrastructureError::Email(format!("provider returned {}: {}", status, detail)),
        ))
    }

    /// Send with retry logic
    async fn send_with_retry(&self, message: &VerificationEmail) -> Result<String, InfrastructureError> {
        let max_retries = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);
        let to = message.to.first().map(String::as_str).unwrap_or_default();

        loop {
            attempts += 1;
            debug!(
                "Sending email attempt {}/{} to {}",
                attempts,
                max_retries,
                mask_email(to)
            );

            match self.send_once(message).await {
                Ok(id) => {
                    info!(
                        email = %mask_email(to),
                        message_id = %id,
                        "Verification email sent"
                    );
                    return Ok(id);
                }
                Err((retryable, e)) => {
                    error!(
                        "Failed to send email (attempt {}/{}): {}",
                        attempts, max_retries, e
                    );

                    if !retryable {
                        return Err(e);
                    }
                    if attempts >= max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send email after {} attempts: {}",
                            attempts, e
                        )));
                    }

                    warn!("Retrying email delivery after {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }
}

/// Rate limiting and server errors are worth another attempt
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl EmailServiceTrait for HttpEmailService {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let message = self.message(email, code);
        self.send_with_retry(&message).await.map_err(|e| e.to_string())
    }
}
