//! Mapping of OTP outcomes and failures onto HTTP responses
//!
//! Every OTP endpoint answers with the flat `MessageResponse` envelope. The
//! messages below are part of the public contract and must not change.

use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};

use otp_core::services::otp::VerifyOutcome;
use otp_shared::types::MessageResponse;

pub const MSG_SENT: &str = "OTP sent successfully!";
pub const MSG_ISSUE_FAILED: &str = "Internal Server Error";
pub const MSG_VERIFIED: &str = "Otp verified successfully";
pub const MSG_MISMATCH: &str = "Invalid OTP";
pub const MSG_NOT_FOUND: &str = "Otp not found or expired!";
pub const MSG_VERIFY_FAILED: &str = "server error";
pub const MSG_INVALID_BODY: &str = "Invalid request body";

/// Every reply an OTP endpoint can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpReply {
    /// Code stored and emailed
    Sent,
    /// Request rejected before any side effect
    Rejected(String),
    /// Store or delivery failed during issuance
    IssueFailed { detail: Option<String> },
    Verified,
    Mismatch,
    /// No current code for the email (also used for expired codes)
    NotFound,
    /// Store failed during verification
    VerifyFailed,
}

impl OtpReply {
    pub fn status(&self) -> StatusCode {
        match self {
            OtpReply::Rejected(_) => StatusCode::BAD_REQUEST,
            OtpReply::IssueFailed { .. } | OtpReply::VerifyFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            OtpReply::Sent | OtpReply::Verified | OtpReply::Mismatch | OtpReply::NotFound => {
                StatusCode::OK
            }
        }
    }

    pub fn body(&self) -> MessageResponse {
        match self {
            OtpReply::Sent => MessageResponse::success(MSG_SENT),
            OtpReply::Rejected(message) => MessageResponse::failure(message.clone()),
            OtpReply::IssueFailed { detail } => {
                let response = MessageResponse::failure(MSG_ISSUE_FAILED);
                match detail {
                    Some(detail) => response.with_error(detail.clone()),
                    None => response,
                }
            }
            OtpReply::Verified => MessageResponse::success(MSG_VERIFIED),
            OtpReply::Mismatch => MessageResponse::failure(MSG_MISMATCH),
            OtpReply::NotFound => MessageResponse::failure(MSG_NOT_FOUND),
            OtpReply::VerifyFailed => MessageResponse::failure(MSG_VERIFY_FAILED),
        }
    }

    pub fn to_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(self.body())
    }
}

impl From<VerifyOutcome> for OtpReply {
    fn from(outcome: VerifyOutcome) -> Self {
        match outcome {
            VerifyOutcome::Verified => OtpReply::Verified,
            VerifyOutcome::Mismatch => OtpReply::Mismatch,
            VerifyOutcome::NotFound | VerifyOutcome::Expired => OtpReply::NotFound,
        }
    }
}

/// JSON extractor settings that answer malformed bodies with the envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(event = "invalid_request_body", error = %err, "Rejected request body");
        let response = HttpResponse::BadRequest().json(MessageResponse::failure(MSG_INVALID_BODY));
        InternalError::from_response(err, response).into()
    })
}
