use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use rb_api::config::load_config;
use rb_api::{create_app, AppState};
use rb_core::services::otp::{
    EmailServiceTrait, InMemoryOtpStore, OtpService, OtpStore, OtpSweeper, SweeperHandle,
};
use rb_core::services::pricing::FareCalculator;
use rb_infra::cache::{RedisClient, RedisOtpStore};
use rb_infra::email::create_email_service;
use rb_shared::config::{AppConfig, CacheBackend, LogFormat, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        bind_address = %config.server.bind_address(),
        "Starting RideBook API server"
    );

    let (store, sweeper) = build_otp_store(&config).await?;
    let email_service = create_email_service(&config.email, config.otp.expiry_seconds);
    let otp_service = Arc::new(OtpService::new(email_service, store, config.otp.clone()));

    let state: web::Data<AppState<dyn EmailServiceTrait, dyn OtpStore>> =
        web::Data::new(AppState::new(otp_service, FareCalculator::default()));

    let server_config = config.server.clone();
    let cors_config = config.cors.clone();

    let mut server = HttpServer::new(move || create_app(state.clone(), &server_config, &cors_config))
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(config.server.bind_address())
        .with_context(|| format!("Failed to bind {}", config.server.bind_address()))?
        .run()
        .await;

    if let Some(handle) = sweeper {
        handle.shutdown().await;
    }
    tracing::info!("RideBook API server stopped");

    result.context("HTTP server error")
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(logging.colored)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

/// Build the configured OTP store. The in-memory store gets a running sweeper
/// that the caller must shut down; Redis expires keys itself.
async fn build_otp_store(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn OtpStore>, Option<SweeperHandle>)> {
    match config.cache.backend {
        CacheBackend::Memory => {
            let store = Arc::new(InMemoryOtpStore::new(config.otp.clone()));
            let sweeper = OtpSweeper::from_config(store.clone(), &config.otp).start();
            tracing::info!("Using in-memory verification code store");
            let store: Arc<dyn OtpStore> = store;
            Ok((store, Some(sweeper)))
        }
        CacheBackend::Redis => {
            let client = RedisClient::new(&config.cache)
                .await
                .context("Failed to connect to Redis")?;
            let store = RedisOtpStore::new(client, config.cache.key_prefix.clone(), config.otp.clone());
            tracing::info!("Using Redis verification code store");
            let store: Arc<dyn OtpStore> = Arc::new(store);
            Ok((store, None))
        }
    }
}
