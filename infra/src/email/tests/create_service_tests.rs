//! Tests for provider selection

use otp_shared::config::{EmailConfig, EmailProvider};

use crate::email::create_email_service;
use crate::InfrastructureError;

#[test]
fn test_mock_provider_by_default() {
    let service = create_email_service(&EmailConfig::default()).unwrap();
    assert_eq!(service.provider_name(), "mock");
}

#[test]
fn test_sendgrid_requires_api_key() {
    let config = EmailConfig {
        provider: EmailProvider::SendGrid,
        api_key: Some("   ".to_string()),
        ..Default::default()
    };

    match create_email_service(&config) {
        Err(InfrastructureError::Config(message)) => assert!(message.contains("SENDGRID_API_KEY")),
        Err(other) => panic!("Expected config error, got {}", other),
        Ok(_) => panic!("Expected config error"),
    }
}

#[test]
fn test_sendgrid_selected_with_key() {
    let config = EmailConfig {
        provider: EmailProvider::SendGrid,
        api_key: Some("SG.test-key".to_string()),
        sender: "otp@coursegate.io".to_string(),
        ..Default::default()
    };

    let service = create_email_service(&config).unwrap();
    assert_eq!(service.provider_name(), "sendgrid");
}
