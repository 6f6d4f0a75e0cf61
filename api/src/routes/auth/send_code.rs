use actix_web::{web, HttpResponse};
use validator::Validate;

use rb_core::services::otp::{EmailServiceTrait, OtpStore};
use rb_shared::utils::mask_email;

use crate::dto::auth::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::{log_domain_error, public_message, status_for, validation_message};
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/send-code
///
/// Issues a verification code for `(email, verificationId)` and emails it.
/// Requesting again replaces the previous code.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "rider@example.com",
///     "verificationId": "signup-7f3a"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "Verification code sent" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed email or verification id
/// - 503 Service Unavailable: the email could not be delivered
pub async fn send_code<E, S>(
    state: web::Data<AppState<E, S>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    E: EmailServiceTrait + ?Sized + 'static,
    S: OtpStore + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        let message = validation_message(&errors);
        tracing::warn!(
            email = %mask_email(&request.email),
            reason = %message,
            "Rejected send_code request"
        );
        return HttpResponse::BadRequest().json(SendCodeResponse::failed(message));
    }

    match state
        .otp_service
        .send_code(&request.email, &request.verification_id)
        .await
    {
        Ok(result) => {
            tracing::info!(
                email = %mask_email(&result.email),
                message_id = %result.message_id,
                expires_at = %result.expires_at,
                "Verification code sent"
            );
            HttpResponse::Ok().json(SendCodeResponse::sent())
        }
        Err(error) => {
            log_domain_error(&error);
            HttpResponse::build(status_for(&error)).json(SendCodeResponse::failed(public_message(&error)))
        }
    }
}
