//! Tests for the in-memory OTP repository

use chrono::{Duration, Utc};

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainError;
use crate::repositories::otp::mock::MockOtpRepository;
use crate::repositories::otp::OtpRepository;

fn record(email: &str, code: u16) -> OtpRecord {
    OtpRecord::new(email.to_string(), Some("Alice".to_string()), code, Utc::now())
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = MockOtpRepository::new();
    repo.create(record("alice@example.com", 1234)).await.unwrap();

    let found = repo.find_by_identity("alice@example.com").await.unwrap().unwrap();
    assert_eq!(found.code, 1234);

    // Exact match: no case folding
    assert!(repo.find_by_identity("Alice@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_overwrites_existing() {
    let repo = MockOtpRepository::new();
    repo.create(record("alice@example.com", 1234)).await.unwrap();
    repo.create(record("alice@example.com", 5678)).await.unwrap();

    assert_eq!(repo.len().await, 1);
    assert_eq!(repo.get("alice@example.com").await.unwrap().code, 5678);
}

#[tokio::test]
async fn test_update_code_keeps_name() {
    let repo = MockOtpRepository::new();
    repo.create(record("alice@example.com", 1234)).await.unwrap();
    let later = Utc::now() + Duration::minutes(2);

    repo.update_code("alice@example.com", 9876, later).await.unwrap();

    let stored = repo.get("alice@example.com").await.unwrap();
    assert_eq!(stored.code, 9876);
    assert_eq!(stored.issued_at, later);
    assert_eq!(stored.name.as_deref(), Some("Alice"));
}

#[tokio::test]
async fn test_update_missing_record() {
    let repo = MockOtpRepository::new();
    let result = repo.update_code("nobody@example.com", 1111, Utc::now()).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete() {
    let repo = MockOtpRepository::new();
    repo.create(record("alice@example.com", 1234)).await.unwrap();

    assert!(repo.delete("alice@example.com").await.unwrap());
    assert!(!repo.delete("alice@example.com").await.unwrap());
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_failing_mode_counts_calls() {
    let repo = MockOtpRepository::failing();
    assert!(repo.find_by_identity("alice@example.com").await.is_err());
    assert_eq!(repo.call_count(), 1);

    repo.set_should_fail(false);
    assert!(repo.find_by_identity("alice@example.com").await.is_ok());
    assert_eq!(repo.call_count(), 2);
}
