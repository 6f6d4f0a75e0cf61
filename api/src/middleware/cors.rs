//! CORS middleware configuration for cross-origin requests.
//!
//! Booking web clients call the API from another origin. An empty
//! `cors.allowed_origins` list (or one containing `*`) accepts any origin,
//! which is meant for development; production deployments list their
//! front-end origins explicitly.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use rb_shared::config::CorsConfig;

/// Build the CORS middleware from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::debug!("CORS allows any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!(origin = origin, "Adding allowed origin");
            cors.allowed_origin(origin)
        })
}
