//! In-memory email service for tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::traits::{EmailMessage, EmailServiceTrait};

/// Email service that keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingEmailService {
    pub sent_messages: Arc<Mutex<Vec<EmailMessage>>>,
    should_fail: AtomicBool,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl RecordingEmailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            should_fail: AtomicBool::new(should_fail),
            ..Self::default()
        }
    }

    /// Service that sleeps before answering, for timeout tests
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Number of send attempts, including failed ones
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent_messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Most recent message addressed to `email`
    pub fn last_message_for(&self, email: &str) -> Option<EmailMessage> {
        self.sent().into_iter().rev().find(|m| m.to == email)
    }

    /// Code from the most recent message to `email`
    ///
    /// Reads the digits following "code is" in the plain-text body.
    pub fn last_code_for(&self, email: &str) -> Option<u16> {
        let message = self.last_message_for(email)?;
        let (_, rest) = message.text.split_once("code is ")?;
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

#[async_trait]
impl EmailServiceTrait for RecordingEmailService {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Email service error".to_string());
        }

        let mut sent = self
            .sent_messages
            .lock()
            .map_err(|_| "Email log poisoned".to_string())?;
        sent.push(message.clone());
        Ok(format!("recorded-{}", sent.len()))
    }

    fn provider_name(&self) -> &str {
        "recording"
    }
}
