use actix_web::{web, HttpResponse};
use validator::Validate;

use otp_core::errors::DomainError;
use otp_core::repositories::OtpRepository;
use otp_core::services::otp::EmailServiceTrait;
use otp_shared::utils::validation::mask_email;

use super::AppState;
use crate::dto::otp::SendOtpRequest;
use crate::handlers::OtpReply;

/// Handler for POST /api/otp/send
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "alice@example.com", "phone": "...", "age": 29 }
/// ```
///
/// # Response
///
/// - 200 `{ "success": true, "message": "OTP sent successfully!" }`
/// - 400 `{ "success": false, "message": "Email is required" }`
/// - 500 `{ "success": false, "message": "Internal Server Error", "error": "..." }`
///
/// `error` is only present when internal errors are exposed.
pub async fn send_otp<R, E>(
    state: web::Data<AppState<R, E>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + ?Sized + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        tracing::warn!(event = "otp_send_rejected", reason = %message, "Invalid send request");
        return OtpReply::Rejected(message).to_response();
    }

    let masked = request
        .email
        .as_deref()
        .map(mask_email)
        .unwrap_or_default();

    let reply = match state.otp_service.issue_code(request.into_command()).await {
        Ok(issued) => {
            tracing::debug!(
                email = %masked,
                message_id = %issued.message_id,
                refreshed = issued.refreshed,
                "Send request completed"
            );
            OtpReply::Sent
        }
        Err(DomainError::Validation { message }) => {
            tracing::warn!(event = "otp_send_rejected", reason = %message, "Invalid send request");
            OtpReply::Rejected(message)
        }
        Err(error) => {
            tracing::error!(
                email = %masked,
                error = %error,
                event = "otp_send_failed",
                "Failed to issue verification code"
            );
            OtpReply::IssueFailed {
                detail: state
                    .expose_internal_errors
                    .then(|| error.detail().to_string()),
            }
        }
    };

    reply.to_response()
}
