//! Configuration loading
//!
//! Layers, later ones overriding earlier ones:
//! 1. Built-in defaults for the detected environment
//! 2. `config.<environment>.{toml,yaml,json}` in the working directory, if present
//! 3. `RIDE__*` environment variables, `__` separating nested keys
//!    (`RIDE__SERVER__PORT=9000`, `RIDE__CACHE__BACKEND=redis`)
//!
//! `.env` and `.env.<environment>` files are read into the process
//! environment first.

use config::{Config, ConfigError, Environment as EnvSource, File};

use rb_shared::config::{AppConfig, Environment};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "RIDE";

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let environment = Environment::from_env();
    dotenvy::from_filename(environment.env_file()).ok();

    load_config_for(environment)
}

/// Load configuration for a given environment
pub fn load_config_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);

    Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_shared::config::{CacheBackend, LogFormat};

    #[test]
    fn test_defaults_without_overrides() {
        let config = load_config_for(Environment::Staging).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.otp.expiry_seconds, 100);
        assert_eq!(config.otp.max_attempts, 3);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
    }

    #[test]
    fn test_production_logging_defaults() {
        let config = load_config_for(Environment::Production).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        // Only this test sets these variables
        std::env::set_var("RIDE__SERVER__PORT", "9123");
        std::env::set_var("RIDE__OTP__SWEEP_INTERVAL_SECONDS", "60");

        let config = load_config_for(Environment::Development).unwrap();

        std::env::remove_var("RIDE__SERVER__PORT");
        std::env::remove_var("RIDE__OTP__SWEEP_INTERVAL_SECONDS");

        assert_eq!(config.server.port, 9123);
        assert_eq!(config.otp.sweep_interval_seconds, 60);
    }
}
