//! Email delivery configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse};
use crate::utils::validation::is_valid_email;

/// Email delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// SendGrid v3 mail API
    SendGrid,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mock" => Ok(EmailProvider::Mock),
            "sendgrid" => Ok(EmailProvider::SendGrid),
            other => Err(format!("Unknown email provider: {}", other)),
        }
    }
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Which provider implementation to wire up
    pub provider: EmailProvider,

    /// Provider API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Pre-verified sender address used as `from`
    pub sender: String,

    /// Provider API base URL
    pub base_url: String,

    /// Timeout for a single delivery request in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            api_key: None,
            sender: String::from("no-reply@localhost"),
            base_url: String::from("https://api.sendgrid.com"),
            request_timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// An unknown `EMAIL_PROVIDER` falls back to the mock provider; a
    /// `SENDGRID_API_KEY` without an explicit provider selects SendGrid.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_key = std::env::var("SENDGRID_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let provider = match std::env::var("EMAIL_PROVIDER") {
            Ok(value) => value.parse().unwrap_or(EmailProvider::Mock),
            Err(_) if api_key.is_some() => EmailProvider::SendGrid,
            Err(_) => EmailProvider::Mock,
        };

        Self {
            provider,
            api_key,
            sender: env_or("VERIFIED_SENDER_EMAIL", &defaults.sender),
            base_url: env_or("SENDGRID_BASE_URL", &defaults.base_url),
            request_timeout_secs: env_parse("EMAIL_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
        }
    }

    /// Check that a real provider has what it needs to send
    pub fn validate(&self) -> Result<(), String> {
        if self.provider == EmailProvider::SendGrid {
            if self.api_key.is_none() {
                return Err("SENDGRID_API_KEY is required for the sendgrid provider".to_string());
            }
            if !is_valid_email(&self.sender) {
                return Err("VERIFIED_SENDER_EMAIL must be a valid sender address".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("SendGrid".parse::<EmailProvider>().unwrap(), EmailProvider::SendGrid);
        assert_eq!("mock".parse::<EmailProvider>().unwrap(), EmailProvider::Mock);
        assert!("smtp".parse::<EmailProvider>().is_err());
    }

    #[test]
    fn test_sendgrid_requires_credentials() {
        let mut config = EmailConfig {
            provider: EmailProvider::SendGrid,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.api_key = Some("SG.key".to_string());
        config.sender = "otp@coursegate.io".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sendgrid_sender_must_be_an_address() {
        let mut config = EmailConfig {
            provider: EmailProvider::SendGrid,
            api_key: Some("SG.key".to_string()),
            ..Default::default()
        };
        for sender in ["no-reply@localhost", "otp", "otp team@coursegate.io"] {
            config.sender = sender.to_string();
            assert!(config.validate().is_err(), "{} should be rejected", sender);
        }

        config.sender = "otp@coursegate.io".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mock_needs_nothing() {
        assert!(EmailConfig::default().validate().is_ok());
    }
}
