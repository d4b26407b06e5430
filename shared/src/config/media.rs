//! Media hosting configuration (Cloudinary-compatible upload API)

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};

/// Media hosting configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Cloud (account) name used in the upload path
    pub cloud_name: String,

    /// API key sent with every signed upload
    pub api_key: String,

    /// API secret used to sign uploads; never sent over the wire
    pub api_secret: String,

    /// API base URL
    pub base_url: String,

    /// Timeout for a single upload request in seconds
    pub request_timeout_secs: u64,
}

impl MediaConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            cloud_name: env_or("CLOUDINARY_CLOUD_NAME", ""),
            api_key: env_or("CLOUDINARY_API_KEY", ""),
            api_secret: env_or("CLOUDINARY_API_SECRET", ""),
            base_url: env_or("CLOUDINARY_BASE_URL", "https://api.cloudinary.com"),
            request_timeout_secs: env_parse("MEDIA_REQUEST_TIMEOUT_SECS", 60),
        }
    }

    /// Check that all credentials are present
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = [
            ("CLOUDINARY_CLOUD_NAME", &self.cloud_name),
            ("CLOUDINARY_API_KEY", &self.api_key),
            ("CLOUDINARY_API_SECRET", &self.api_secret),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing media configuration: {}", missing.join(", ")))
        }
    }
}
