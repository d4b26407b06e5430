//! Configuration for the OTP service

use std::time::Duration;

use otp_shared::config::OtpConfig;

use crate::domain::entities::otp_record::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Minutes a code is announced (and, if enforced, accepted) for
    pub code_ttl_minutes: i64,
    /// Reject codes older than `code_ttl_minutes` with `VerifyOutcome::Expired`
    pub enforce_expiry: bool,
    /// Delete the record once a code has been verified
    pub consume_on_success: bool,
    /// Upper bound for each store or delivery call
    pub collaborator_timeout: Duration,
    /// Pre-verified sender address placed in `from`
    pub sender: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_EXPIRATION_MINUTES,
            enforce_expiry: false,
            consume_on_success: false,
            collaborator_timeout: Duration::from_secs(10),
            sender: "no-reply@localhost".to_string(),
        }
    }
}

impl OtpServiceConfig {
    /// Build from the process configuration
    pub fn from_config(otp: &OtpConfig, sender: impl Into<String>) -> Self {
        Self {
            code_ttl_minutes: otp.code_ttl_minutes,
            enforce_expiry: otp.enforce_expiry,
            consume_on_success: otp.consume_on_success,
            collaborator_timeout: Duration::from_secs(otp.collaborator_timeout_secs),
            sender: sender.into(),
        }
    }
}
