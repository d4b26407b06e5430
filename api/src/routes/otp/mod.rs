//! One-time passcode route handlers
//!
//! - `POST /api/otp/send` (alias `/api/otp/get-otp`) issues and emails a code
//! - `POST /api/otp/verify` (alias `/api/otp/verify-otp`) checks a submission

pub mod send_otp;
pub mod verify_otp;

use actix_web::web;
use std::sync::Arc;

use otp_core::repositories::OtpRepository;
use otp_core::services::otp::{EmailServiceTrait, OtpService};

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<R, E>
where
    R: OtpRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    pub otp_service: Arc<OtpService<R, E>>,
    /// Include collaborator error text in issuance 500 responses
    pub expose_internal_errors: bool,
}

impl<R, E> AppState<R, E>
where
    R: OtpRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    pub fn new(otp_service: Arc<OtpService<R, E>>, expose_internal_errors: bool) -> Self {
        Self {
            otp_service,
            expose_internal_errors,
        }
    }
}

/// Register the OTP scope
pub fn configure<R, E>(cfg: &mut web::ServiceConfig)
where
    R: OtpRepository + ?Sized + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
{
    cfg.service(
        web::scope("/api/otp")
            .route("/send", web::post().to(send_otp::<R, E>))
            .route("/get-otp", web::post().to(send_otp::<R, E>))
            .route("/verify", web::post().to(verify_otp::<R, E>))
            .route("/verify-otp", web::post().to(verify_otp::<R, E>)),
    );
}
