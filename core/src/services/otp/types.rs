//! Types for OTP service requests and results

use chrono::{DateTime, Utc};

/// Input to an issuance
///
/// Only `email` and `name` take part in issuance; other request fields the
/// client may send (phone, age) are not carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCodeCommand {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl IssueCodeCommand {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// Normalized email the code is stored under
    pub email: String,
    /// The code that was stored and emailed
    pub code: u16,
    /// Whether an existing record was overwritten
    pub refreshed: bool,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Message id returned by the email provider
    pub message_id: String,
}

/// Result of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The submission equals the current code
    Verified,
    /// A code exists but the submission differs
    Mismatch,
    /// No code has been issued for the email (or it was consumed)
    NotFound,
    /// The code is past its window; only reported when expiry is enforced
    Expired,
}

impl VerifyOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified)
    }

    /// Stable label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            VerifyOutcome::Verified => "verified",
            VerifyOutcome::Mismatch => "mismatch",
            VerifyOutcome::NotFound => "not_found",
            VerifyOutcome::Expired => "expired",
        }
    }
}
