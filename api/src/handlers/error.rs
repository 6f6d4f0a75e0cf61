//! Mapping of domain failures to HTTP responses
//!
//! Every status code the API returns for an error is decided here.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use validator::ValidationErrors;

use rb_core::errors::{DomainError, OtpError};
use rb_shared::errors::{error_codes, ErrorResponse};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::EmailDelivery { .. } => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Otp(OtpError::TooManyAttempts) => StatusCode::TOO_MANY_REQUESTS,
        DomainError::Otp(_) => StatusCode::BAD_REQUEST,
    }
}

/// Machine-readable code for a domain error
pub fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
        DomainError::EmailDelivery { .. } => error_codes::EMAIL_DELIVERY_FAILED,
        DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        DomainError::Otp(otp) => otp.code(),
    }
}

/// Message safe to show to a client.
///
/// Provider and internal details stay in the logs.
pub fn public_message(error: &DomainError) -> String {
    match error {
        DomainError::Validation { message } => message.clone(),
        DomainError::EmailDelivery { .. } => {
            "Unable to send verification email. Please try again later".to_string()
        }
        DomainError::Internal { .. } => "An internal error occurred".to_string(),
        other => other.to_string(),
    }
}

/// Log a domain error at a level matching its status
pub fn log_domain_error(error: &DomainError) {
    let status = status_for(error);
    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Request failed");
    } else {
        tracing::debug!(error = %error, status = status.as_u16(), "Request rejected");
    }
}

/// Standard error body for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    log_domain_error(error);
    HttpResponse::build(status_for(error))
        .json(ErrorResponse::new(error_code(error), public_message(error)))
}

/// First message of every failed field, sorted by field name
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns body extraction failures into the standard JSON error body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let body = ErrorResponse::new(error_codes::BAD_REQUEST, format!("Invalid request body: {}", err));
    let response = HttpResponse::build(status).json(body);

    InternalError::from_response(err, response).into()
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
