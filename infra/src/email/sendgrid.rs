//! SendGrid Email Service Implementation
//!
//! Sends messages through the SendGrid v3 `mail/send` endpoint. A request is
//! accepted with `202` and the message id is read from `X-Message-Id`.
//! Deliveries are not retried.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

use otp_core::services::otp::{EmailMessage, EmailServiceTrait};
use otp_shared::config::EmailConfig;
use otp_shared::utils::validation::mask_email;

use crate::InfrastructureError;

/// SendGrid service configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TryFrom<&EmailConfig> for SendGridConfig {
    type Error = InfrastructureError;

    fn try_from(config: &EmailConfig) -> Result<Self, Self::Error> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("SENDGRID_API_KEY not set".to_string()))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MailPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl<'a> MailPayload<'a> {
    /// Build the v3 payload; plain text must precede HTML
    pub(crate) fn from_message(message: &'a EmailMessage) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![Address { email: &message.to }],
            }],
            from: Address {
                email: &message.from,
            },
            subject: &message.subject,
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &message.text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html,
                },
            ],
        }
    }
}

/// SendGrid email service implementation
pub struct SendGridEmailService {
    client: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridEmailService {
    /// Create a new SendGrid email service
    pub fn new(config: SendGridConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(base_url = %config.base_url, "SendGrid email service initialized");

        Ok(Self { client, config })
    }

    pub(crate) fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.config.base_url)
    }

    /// Send a message, returning the provider message id
    pub async fn send_message(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let payload = MailPayload::from_message(message);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(to = %mask_email(&message.to), error = %e, "SendGrid request failed");
                InfrastructureError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                to = %mask_email(&message.to),
                status = status.as_u16(),
                "SendGrid rejected message"
            );
            return Err(InfrastructureError::Email(format!(
                "SendGrid API error {}: {}",
                status, body
            )));
        }

        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| format!("sendgrid-{}", Uuid::new_v4()));

        info!(
            target: "email_service",
            provider = "sendgrid",
            to = %mask_email(&message.to),
            message_id = %message_id,
            "Email accepted"
        );

        Ok(message_id)
    }
}

#[async_trait]
impl EmailServiceTrait for SendGridEmailService {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        self.send_message(message).await.map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "sendgrid"
    }
}
