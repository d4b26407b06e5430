//! Configuration module with business-specific sub-modules
//!
//! Every section is loaded from environment variables once at process start
//! and handed to the services that need it:
//! - `database` - MySQL connection and pool configuration
//! - `email` - Email delivery provider credentials and sender identity
//! - `environment` - Environment detection and logging configuration
//! - `media` - Media hosting credentials used by the catalog seeder
//! - `otp` - One-time passcode lifecycle policy
//! - `server` - HTTP server configuration

pub mod database;
pub mod email;
pub mod environment;
pub mod media;
pub mod otp;
pub mod server;

use std::str::FromStr;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailProvider};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use media::MediaConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Read an environment variable, falling back to `default` when unset
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to `default` when
/// unset or unparsable
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a boolean flag; accepts `true/false`, `1/0`, `yes/no`, `on/off`
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).unwrap_or(default),
        Err(_) => default,
    }
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        std::env::set_var("OTP_SHARED_TEST_PARSE", "not-a-number");
        assert_eq!(env_parse("OTP_SHARED_TEST_PARSE", 42u64), 42);
        std::env::set_var("OTP_SHARED_TEST_PARSE", " 7 ");
        assert_eq!(env_parse("OTP_SHARED_TEST_PARSE", 42u64), 7);
        std::env::remove_var("OTP_SHARED_TEST_PARSE");
    }
}
