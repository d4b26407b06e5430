//! Process configuration assembled from the shared sections

use serde::{Deserialize, Serialize};
use thiserror::Error;

use otp_core::services::otp::OtpServiceConfig;
use otp_shared::config::{
    DatabaseConfig, EmailConfig, Environment, LoggingConfig, MediaConfig, OtpConfig, ServerConfig,
};

use crate::middleware::cors::CorsConfig;

/// Configuration errors detected at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {section} configuration: {message}")]
    Invalid { section: &'static str, message: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub email: EmailConfig,
    pub media: MediaConfig,
    pub otp: OtpConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load every section from the environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            media: MediaConfig::from_env(),
            otp: OtpConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
            cors: CorsConfig::from_env(environment),
        }
    }

    /// Check the sections the HTTP server depends on
    ///
    /// Production refuses to start with the mock email provider. Media
    /// credentials are only checked by the seeding tool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.otp.validate().map_err(|message| ConfigError::Invalid {
            section: "otp",
            message,
        })?;

        self.email.validate().map_err(|message| ConfigError::Invalid {
            section: "email",
            message,
        })?;

        if self.is_production() && self.email.api_key.is_none() {
            return Err(ConfigError::Invalid {
                section: "email",
                message: "SENDGRID_API_KEY is required in production".to_string(),
            });
        }

        Ok(())
    }

    /// OTP service settings derived from the OTP and email sections
    pub fn otp_service_config(&self) -> OtpServiceConfig {
        OtpServiceConfig::from_config(&self.otp, self.email.sender.clone())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
