use actix_web::{web, HttpResponse};

use otp_core::repositories::OtpRepository;
use otp_core::services::otp::EmailServiceTrait;
use otp_shared::utils::validation::mask_email;

use super::AppState;
use crate::dto::otp::VerifyOtpRequest;
use crate::handlers::OtpReply;

/// Handler for POST /api/otp/verify
///
/// `enteredOtp` may be a JSON number or a string; `1234` and `"1234"` are
/// the same submission.
///
/// # Response
///
/// - 200 `{ "success": true, "message": "Otp verified successfully" }`
/// - 200 `{ "success": false, "message": "Invalid OTP" }`
/// - 200 `{ "success": false, "message": "Otp not found or expired!" }`
/// - 500 `{ "success": false, "message": "server error" }`
pub async fn verify_otp<R, E>(
    state: web::Data<AppState<R, E>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    R: OtpRepository + ?Sized + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
{
    let submitted = request.submitted_code();

    let reply = match state
        .otp_service
        .verify_code(request.email.as_deref(), &submitted)
        .await
    {
        Ok(outcome) => OtpReply::from(outcome),
        Err(error) => {
            tracing::error!(
                email = %request.email.as_deref().map(mask_email).unwrap_or_default(),
                error = %error,
                event = "otp_verify_failed",
                "Failed to verify code"
            );
            OtpReply::VerifyFailed
        }
    };

    reply.to_response()
}
