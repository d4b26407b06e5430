//! CORS middleware configuration for cross-origin requests.
//!
//! Browser clients post the OTP forms from another origin. Development allows
//! any origin; production only allows the configured ones.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use serde::{Deserialize, Serialize};

use otp_shared::config::Environment;

/// CORS settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allow any origin
    pub permissive: bool,
    /// Origins allowed when not permissive
    pub allowed_origins: Vec<String>,
    /// Max age for the preflight cache in seconds
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            permissive: true,
            allowed_origins: Vec::new(),
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Load from environment variables
    ///
    /// - `ALLOWED_ORIGINS`: comma-separated list of allowed origins
    /// - `CORS_MAX_AGE`: max age for preflight cache (default: 3600 seconds)
    pub fn from_env(environment: Environment) -> Self {
        let max_age = std::env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(3600);

        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map(|origins| Self::parse_origins(&origins))
            .unwrap_or_default();

        Self {
            permissive: !environment.is_production(),
            allowed_origins,
            max_age,
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Creates a CORS middleware instance from the configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age);

    if config.permissive {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
