//! One-time passcode record keyed by email.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Smallest code that can be issued
pub const CODE_MIN: u16 = 1000;

/// Largest code that can be issued
pub const CODE_MAX: u16 = 9999;

/// Expiry window announced to the user (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// The single active passcode for an email address
///
/// There is at most one record per `email`; issuing again overwrites `code`
/// and `issued_at` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Email address the code was sent to (exact-match key)
    pub email: String,

    /// Display name used to personalize the email, never used for matching
    pub name: Option<String>,

    /// The 4-digit code
    pub code: u16,

    /// When the current code was issued
    pub issued_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record for a freshly issued code
    pub fn new(email: String, name: Option<String>, code: u16, issued_at: DateTime<Utc>) -> Self {
        Self {
            email,
            name,
            code,
            issued_at,
        }
    }

    /// Draws a code uniformly from `CODE_MIN..=CODE_MAX`
    pub fn generate_code() -> u16 {
        rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX)
    }

    /// Replaces the code and issue time; the display name is kept
    pub fn refresh(&mut self, code: u16, issued_at: DateTime<Utc>) {
        self.code = code;
        self.issued_at = issued_at;
    }

    /// When the current code stops being valid under a `ttl_minutes` window
    pub fn expires_at(&self, ttl_minutes: i64) -> DateTime<Utc> {
        Self::expiry_after(self.issued_at, ttl_minutes)
    }

    /// End of the validity window for a code issued at `issued_at`
    pub fn expiry_after(issued_at: DateTime<Utc>, ttl_minutes: i64) -> DateTime<Utc> {
        issued_at + Duration::minutes(ttl_minutes)
    }

    /// Whether the code is past its window at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl_minutes: i64) -> bool {
        now > self.expires_at(ttl_minutes)
    }

    /// Compares a submission against the stored code
    pub fn matches(&self, submitted: &SubmittedCode) -> bool {
        submitted.value() == Some(i64::from(self.code))
    }
}

/// A code as submitted by a client
///
/// Clients send the code either as a JSON number or as a string; both forms
/// are normalized to an integer so `1234` and `"1234"` compare equal. Anything
/// that does not normalize to an integer never matches a stored code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmittedCode(Option<i64>);

impl SubmittedCode {
    /// A submission that can never match
    pub fn missing() -> Self {
        Self(None)
    }

    /// Normalized integer value, if any
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    fn from_f64(value: f64) -> Self {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Self(Some(value as i64))
        } else {
            Self(None)
        }
    }
}

impl From<&str> for SubmittedCode {
    fn from(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self(None);
        }
        match trimmed.parse::<i64>() {
            Ok(value) => Self(Some(value)),
            Err(_) => trimmed
                .parse::<f64>()
                .map(Self::from_f64)
                .unwrap_or_default(),
        }
    }
}

impl From<u16> for SubmittedCode {
    fn from(code: u16) -> Self {
        Self(Some(i64::from(code)))
    }
}

impl From<&Value> for SubmittedCode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self(Some(int)),
                None => number.as_f64().map(Self::from_f64).unwrap_or_default(),
            },
            Value::String(text) => Self::from(text.as_str()),
            _ => Self(None),
        }
    }
}

impl From<Option<&Value>> for SubmittedCode {
    fn from(value: Option<&Value>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}
