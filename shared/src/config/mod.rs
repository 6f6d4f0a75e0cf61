//! Configuration module with business-specific sub-modules
//!
//! - `cache` - OTP store backend and Redis connection
//! - `email` - Outbound email provider
//! - `environment` - Environment detection and logging configuration
//! - `otp` - Verification code expiry, attempt limit and sweep cadence
//! - `server` - HTTP server and CORS configuration

pub mod cache;
pub mod email;
pub mod environment;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::{CacheBackend, CacheConfig};
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Verification code policy
    #[serde(default)]
    pub otp: OtpConfig,

    /// OTP store backend
    #[serde(default)]
    pub cache: CacheConfig,

    /// Email delivery
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Baseline configuration for an environment, before file and env overrides
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        }
    }
}
