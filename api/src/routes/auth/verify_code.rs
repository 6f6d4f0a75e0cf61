use actix_web::{web, HttpResponse};
use validator::Validate;

use rb_core::services::otp::{EmailServiceTrait, OtpStore};
use rb_shared::errors::error_codes;

use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{error_code, log_domain_error, public_message, status_for, validation_message};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/verify-code
///
/// A code is accepted once. Wrong guesses count against the code; after three
/// the code is burned and a new one must be requested.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "rider@example.com",
///     "code": "482913",
///     "verificationId": "signup-7f3a"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed input, unknown, expired or wrong code
/// - 429 Too Many Requests: attempt limit reached
pub async fn verify_code<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    E: EmailServiceTrait + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(VerifyCodeResponse::rejected(
            validation_message(&errors),
            error_codes::VALIDATION_ERROR,
        ));
    }

    match state
        .otp_service
        .verify_code(&request.email, &request.verification_id, &request.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(VerifyCodeResponse::verified()),
        Err(error) => {
            log_domain_error(&error);
            HttpResponse::build(status_for(&error)).json(VerifyCodeResponse::rejected(
                public_message(&error),
                error_code(&error),
            ))
        }
    }
}
