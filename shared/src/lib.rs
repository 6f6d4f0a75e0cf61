//! Shared utilities and common types for the RideBook server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error and response structures
//! - Utility functions (email validation and masking, code format checks)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheBackend, CacheConfig, CorsConfig, EmailConfig, EmailProvider, Environment,
    LoggingConfig, OtpConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::HealthResponse;
pub use utils::{email, validation};
