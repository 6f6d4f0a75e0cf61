//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Log the message instead of sending it
    #[default]
    Mock,
    /// JSON-over-HTTPS transactional email API
    Http,
}

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Delivery provider
    #[serde(default)]
    pub provider: EmailProvider,

    /// Provider endpoint that accepts a send request
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token for the provider API
    #[serde(default)]
    pub api_key: String,

    /// Sender address
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Subject line of verification emails
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Maximum send attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from_address(),
            subject: default_subject(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    String::from("https://api.resend.com/emails")
}

fn default_from_address() -> String {
    String::from("no-reply@ridebook.local")
}

fn default_subject() -> String {
    String::from("Your verification code")
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    10
}
