//! In-memory implementation of OtpRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// In-memory OTP repository
///
/// Counts every call so tests can assert that no storage access happened,
/// and can be switched into a failing mode to exercise error paths.
#[derive(Default)]
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<String, OtpRecord>>>,
    calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl MockOtpRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose every call fails
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.set_should_fail(true);
        repo
    }

    /// Toggle failure mode
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Total number of repository calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no records are stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Read a record without counting the access
    pub async fn get(&self, email: &str) -> Option<OtpRecord> {
        self.records.read().await.get(email).cloned()
    }

    /// Insert a record directly, e.g. to backdate `issued_at`
    pub async fn insert(&self, record: OtpRecord) {
        self.records.write().await.insert(record.email.clone(), record);
    }

    fn track(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::internal("OTP store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn find_by_identity(&self, email: &str) -> Result<Option<OtpRecord>, DomainError> {
        self.track()?;
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        self.track()?;
        self.records
            .write()
            .await
            .insert(record.email.clone(), record.clone());
        Ok(record)
    }

    async fn update_code(
        &self,
        email: &str,
        code: u16,
        issued_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.track()?;
        let mut records = self.records.write().await;
        match records.get_mut(email) {
            Some(record) => {
                record.refresh(code, issued_at);
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("otp record for {}", email),
            }),
        }
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        self.track()?;
        Ok(self.records.write().await.remove(email).is_some())
    }
}
