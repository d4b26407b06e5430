//! Traits for email delivery integration

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A fully rendered email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Trait for email delivery integration
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Deliver a message, returning the provider's message id
    async fn send(&self, message: &EmailMessage) -> Result<String, String>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
