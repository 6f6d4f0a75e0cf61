//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core services depend on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis client and a Redis-backed OTP store
//! - **Email**: verification email delivery (HTTP provider, log-only mock)
//!
//! ## Features
//!
//! - `redis-cache`: Enable the Redis OTP store (default)

use rb_core::errors::DomainError;

/// Cache module - Redis client and OTP store
#[cfg(feature = "redis-cache")]
pub mod cache;

/// Email module - Verification code delivery
pub mod email;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider error
    #[error("Email service error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
