//! OTP store backend configuration

use serde::{Deserialize, Serialize};

/// Where outstanding verification codes are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local map, swept by a background task
    #[default]
    Memory,
    /// Redis with native key expiry, shared between instances
    Redis,
}

/// Cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Store backend
    #[serde(default)]
    pub backend: CacheBackend,

    /// Redis connection URL (used when `backend = "redis"`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Prefix applied to every Redis key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Maximum retry attempts for a Redis operation
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            url: default_url(),
            key_prefix: default_key_prefix(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create a Redis-backed configuration with URL
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            backend: CacheBackend::Redis,
            url: url.into(),
            ..Default::default()
        }
    }
}

fn default_url() -> String {
    String::from("redis://localhost:6379")
}

fn default_key_prefix() -> String {
    String::from("otp")
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
