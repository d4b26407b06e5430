//! Email Delivery Module
//!
//! Implementations of the core `EmailServiceTrait`:
//!
//! - **SendGrid**: production delivery through the v3 mail API
//! - **Mock**: console output for development
//!
//! Addresses are masked in logs.

use std::sync::Arc;

use otp_core::services::otp::EmailServiceTrait;
use otp_shared::config::{EmailConfig, EmailProvider};

use crate::InfrastructureError;

pub mod mock_email;
pub mod sendgrid;

pub use mock_email::MockEmailService;
pub use sendgrid::{SendGridConfig, SendGridEmailService};

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// # Returns
///
/// * `Ok(Arc<dyn EmailServiceTrait>)` - The configured provider
/// * `Err(InfrastructureError::Config)` - SendGrid selected without credentials
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Arc<dyn EmailServiceTrait>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::warn!("Using mock email service, messages are printed instead of sent");
            Ok(Arc::new(MockEmailService::new()))
        }
        EmailProvider::SendGrid => {
            let service = SendGridEmailService::new(SendGridConfig::try_from(config)?)?;
            Ok(Arc::new(service))
        }
    }
}
