//! Application factory
//!
//! Builds the Actix-web application around an `AppState`. The binary and the
//! integration tests share this factory so both exercise the same routing.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use otp_core::repositories::OtpRepository;
use otp_core::services::otp::EmailServiceTrait;
use otp_shared::types::{HealthResponse, MessageResponse};

use crate::handlers::json_config;
use crate::middleware::cors::{create_cors, CorsConfig};
use crate::routes::{self, AppState};

pub const SERVICE_NAME: &str = "otp-api";

/// Create and configure the application with all dependencies
pub fn create_app<R, E>(
    app_state: web::Data<AppState<R, E>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: OtpRepository + ?Sized + 'static,
    E: EmailServiceTrait + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(json_config())
        // Order matters: the last wrap runs first
        .wrap(create_cors(cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(routes::otp::configure::<R, E>)
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(MessageResponse::failure(
        "The requested resource was not found",
    ))
}
