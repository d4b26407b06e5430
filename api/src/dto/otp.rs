use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use otp_core::domain::entities::otp_record::SubmittedCode;
use otp_core::services::otp::IssueCodeCommand;

/// Body of `POST /api/otp/send`
///
/// Only `name` and `email` are used. `name` may be any JSON value and is
/// rendered as text in the greeting; `phone` and `age` are accepted in any
/// JSON type and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Display name used in the email greeting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,

    #[serde(default)]
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl SendOtpRequest {
    pub fn into_command(self) -> IssueCodeCommand {
        IssueCodeCommand {
            email: self.email,
            name: self.name.and_then(display_name),
        }
    }
}

/// Greeting text for a `name` of any JSON type; `null` means no name
fn display_name(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(name) => Some(name),
        other => Some(other.to_string()),
    }
}

/// Body of `POST /api/otp/verify`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub email: Option<String>,

    /// Submitted code, as a JSON number or string
    #[serde(default, rename = "enteredOtp")]
    pub entered_otp: Option<Value>,
}

impl VerifyOtpRequest {
    pub fn submitted_code(&self) -> SubmittedCode {
        SubmittedCode::from(self.entered_otp.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_request_accepts_context_fields_of_any_type() {
        let request: SendOtpRequest = serde_json::from_value(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "phone": 5551234,
            "age": "29",
            "referrer": "newsletter"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let command = request.into_command();
        assert_eq!(command.email.as_deref(), Some("alice@example.com"));
        assert_eq!(command.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_send_request_length_limits() {
        let request = SendOtpRequest {
            email: Some(format!("{}@example.com", "a".repeat(250))),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = SendOtpRequest {
            name: Some(Value::String("A".repeat(300))),
            email: Some("alice@example.com".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_send_request_renders_non_string_names() {
        let name_of = |name: Value| {
            let request: SendOtpRequest =
                serde_json::from_value(json!({ "name": name, "email": "bob@example.com" })).unwrap();
            request.into_command().name
        };

        assert_eq!(name_of(json!(42)).as_deref(), Some("42"));
        assert_eq!(name_of(json!(true)).as_deref(), Some("true"));
        assert_eq!(name_of(json!("Bob")).as_deref(), Some("Bob"));
        assert_eq!(name_of(Value::Null), None);
    }

    #[test]
    fn test_verify_request_reads_entered_otp() {
        let request: VerifyOtpRequest =
            serde_json::from_value(json!({ "email": "alice@example.com", "enteredOtp": "4821" }))
                .unwrap();
        assert_eq!(request.submitted_code().value(), Some(4821));

        let request: VerifyOtpRequest =
            serde_json::from_value(json!({ "email": "alice@example.com", "enteredOtp": 4821 }))
                .unwrap();
        assert_eq!(request.submitted_code().value(), Some(4821));

        let request: VerifyOtpRequest = serde_json::from_value(json!({ "email": "alice@example.com" })).unwrap();
        assert_eq!(request.submitted_code(), SubmittedCode::missing());
    }
}
