use actix_web::HttpResponse;

use rb_shared::types::HealthResponse;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "ridebook-api";

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
