//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat response envelope returned by every OTP endpoint
///
/// ```json
/// { "success": false, "message": "Internal Server Error", "error": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Diagnostic detail for internal failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
        }
    }

    /// Create a failed response without diagnostic detail
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    /// Attach diagnostic detail
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Healthy response stamped with the current time
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_omitted_when_absent() {
        let json = serde_json::to_value(MessageResponse::success("OTP sent successfully!")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "OTP sent successfully!");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_field_present_when_attached() {
        let response = MessageResponse::failure("Internal Server Error").with_error("connection reset");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "connection reset");
    }

    #[test]
    fn test_health_status_serializes_lowercase() {
        let json = serde_json::to_value(HealthResponse::healthy("coursegate-api", "0.1.0")).unwrap();
        assert_eq!(json["status"], "healthy");
    }
}
