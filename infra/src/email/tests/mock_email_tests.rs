//! Tests for the console email service

use otp_core::services::otp::{render_otp_email, EmailServiceTrait};

use crate::email::MockEmailService;

#[tokio::test]
async fn test_mock_send_counts_messages() {
    let service = MockEmailService::with_options(false, false);
    let message = render_otp_email("alice@example.com", "otp@coursegate.io", Some("Alice"), 4821, 5);

    let first = service.send(&message).await.unwrap();
    let second = service.send(&message).await.unwrap();

    assert!(first.starts_with("mock_"));
    assert_ne!(first, second);
    assert_eq!(service.get_message_count(), 2);

    service.reset_counter();
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_simulated_failure() {
    let service = MockEmailService::with_options(false, true);
    let message = render_otp_email("alice@example.com", "otp@coursegate.io", None, 4821, 5);

    assert!(service.send(&message).await.is_err());
    assert_eq!(service.get_message_count(), 0);

    service.set_simulate_failure(false);
    assert!(service.send(&message).await.is_ok());
    assert_eq!(service.get_message_count(), 1);
}
