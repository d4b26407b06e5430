//! OTP repository trait defining the interface for passcode persistence.
//!
//! The store is key-value shaped: one record per email, looked up by exact
//! match on the email string.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::otp_record::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for `OtpRecord` persistence operations
///
/// Implementations must keep at most one record per email. `create` on an
/// email that already has a record overwrites it rather than failing, so two
/// concurrent first issuances resolve to whichever write lands last.
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Find the record for an email
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - Record found
    /// * `Ok(None)` - No code has been issued for this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_identity(&self, email: &str) -> Result<Option<OtpRecord>, DomainError>;

    /// Store a new record
    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Overwrite the code and issue time of an existing record
    ///
    /// The display name is left untouched.
    async fn update_code(
        &self,
        email: &str,
        code: u16,
        issued_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Remove the record for an email
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - There was nothing to delete
    async fn delete(&self, email: &str) -> Result<bool, DomainError>;
}
