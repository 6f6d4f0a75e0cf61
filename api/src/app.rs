//! Application factory
//!
//! Builds the actix-web application around an [`AppState`]. The binary and
//! the integration tests both go through [`create_app`], so tests exercise the
//! real routing table, middleware and body limits.

use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

use rb_core::services::otp::{EmailServiceTrait, OtpStore};
use rb_shared::config::{CorsConfig, ServerConfig};

use crate::handlers::error::{json_error_handler, not_found};
use crate::handlers::health::health_check;
use crate::middleware::cors::create_cors;
use crate::routes::{auth, pricing, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<E, S>(
    app_state: web::Data<AppState<E, S>>,
    server: &ServerConfig,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            impl actix_web::body::MessageBody,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    E: EmailServiceTrait + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        // Registered last, so CORS runs outermost
        .wrap(create_cors(cors))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/send-code", web::post().to(auth::send_code::<E, S>))
                        .route("/verify-code", web::post().to(auth::verify_code::<E, S>)),
                )
                .service(
                    web::scope("/pricing")
                        .route("/breakdown", web::post().to(pricing::breakdown))
                        .route("/quote", web::post().to(pricing::quote::<E, S>)),
                ),
        )
        .default_service(web::route().to(not_found))
}
