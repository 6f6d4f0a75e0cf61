use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

use rb_api::create_app;
use rb_shared::config::{CorsConfig, ServerConfig};
use rb_shared::HealthResponse;

mod common;

use common::harness;

#[actix_web::test]
async fn test_health_check() {
    let h = harness();
    let app = test::init_service(create_app(
        h.state.clone(),
        &ServerConfig::default(),
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: HealthResponse = test::read_body_json(resp).await;
    assert_eq!(body.status, "healthy");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let h = harness();
    let app = test::init_service(create_app(
        h.state.clone(),
        &ServerConfig::default(),
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_json_is_400() {
    let h = harness();
    let app = test::init_service(create_app(
        h.state.clone(),
        &ServerConfig::default(),
        &CorsConfig::default(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_oversized_body_is_413() {
    let h = harness();
    let server = ServerConfig {
        max_payload_size: 64,
        ..ServerConfig::default()
    };
    let app = test::init_service(create_app(h.state.clone(), &server, &CorsConfig::default())).await;

    let padding = "x".repeat(256);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-code")
        .insert_header(("content-type", "application/json"))
        .set_payload(format!(
            r#"{{"email":"rider@example.com","verificationId":"{}"}}"#,
            padding
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
