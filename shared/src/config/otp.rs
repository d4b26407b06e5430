//! One-time passcode policy configuration

use serde::{Deserialize, Serialize};

use super::{env_flag, env_parse};
use crate::config::Environment;

/// OTP lifecycle policy
///
/// The defaults reproduce the lenient legacy behavior: the expiry window is
/// only announced to the user, and a verified code stays valid until the next
/// issuance for the same email.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a code is announced (and, if enforced, accepted) for
    pub code_ttl_minutes: i64,

    /// Reject codes older than `code_ttl_minutes`
    #[serde(default)]
    pub enforce_expiry: bool,

    /// Delete the record after a successful verification
    #[serde(default)]
    pub consume_on_success: bool,

    /// Upper bound for each store or delivery call, in seconds
    pub collaborator_timeout_secs: u64,

    /// Echo collaborator error text in 500 responses
    pub expose_internal_errors: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: 5,
            enforce_expiry: false,
            consume_on_success: false,
            collaborator_timeout_secs: 10,
            expose_internal_errors: true,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_minutes: env_parse("OTP_CODE_TTL_MINUTES", defaults.code_ttl_minutes),
            enforce_expiry: env_flag("OTP_ENFORCE_EXPIRY", defaults.enforce_expiry),
            consume_on_success: env_flag("OTP_CONSUME_ON_SUCCESS", defaults.consume_on_success),
            collaborator_timeout_secs: env_parse(
                "OTP_COLLABORATOR_TIMEOUT_SECS",
                defaults.collaborator_timeout_secs,
            ),
            expose_internal_errors: env_flag("OTP_EXPOSE_INTERNAL_ERRORS", environment.is_debug()),
        }
    }

    /// Hardened policy: expiry enforced and codes are single-use
    pub fn hardened() -> Self {
        Self {
            enforce_expiry: true,
            consume_on_success: true,
            expose_internal_errors: false,
            ..Default::default()
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.code_ttl_minutes <= 0 {
            return Err("OTP_CODE_TTL_MINUTES must be positive".to_string());
        }
        if self.collaborator_timeout_secs == 0 {
            return Err("OTP_COLLABORATOR_TIMEOUT_SECS must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = OtpConfig::default();
        assert_eq!(config.code_ttl_minutes, 5);
        assert!(!config.enforce_expiry);
        assert!(!config.consume_on_success);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hardened() {
        let config = OtpConfig::hardened();
        assert!(config.enforce_expiry);
        assert!(config.consume_on_success);
        assert!(!config.expose_internal_errors);
    }

    #[test]
    fn test_validate_rejects_zero_ttl() {
        let config = OtpConfig {
            code_ttl_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
