//! OTP API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use otp_api::app::create_app;
use otp_api::config::AppConfig;
use otp_api::handlers::json_config;
use otp_api::routes::AppState;
use otp_api::telemetry::init_tracing;
use otp_core::services::otp::{EmailServiceTrait, OtpService};
use otp_infra::database::{DatabasePool, MySqlOtpRepository};
use otp_infra::email::create_email_service;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate()?;

    tracing::info!(
        environment = ?config.environment,
        email_provider = ?config.email.provider,
        enforce_expiry = config.otp.enforce_expiry,
        consume_on_success = config.otp.consume_on_success,
        "Starting OTP API server"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    pool.ensure_schema()
        .await
        .context("Failed to prepare the database schema")?;

    let repository = Arc::new(MySqlOtpRepository::new(pool.get_pool().clone()));
    let email_service: Arc<dyn EmailServiceTrait> =
        create_email_service(&config.email).context("Failed to create email service")?;

    let otp_service = Arc::new(OtpService::new(
        repository,
        email_service,
        config.otp_service_config(),
    ));
    let state = web::Data::new(AppState::new(
        otp_service,
        config.otp.expose_internal_errors,
    ));

    let bind_address = config.server.bind_address();
    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;

    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), &cors).app_data(json_config().limit(max_payload_size))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}
