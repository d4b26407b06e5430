//! MySQL implementation of the OtpRepository trait.
//!
//! One row per email in `otp_codes`. The create path is an upsert so two
//! concurrent first issuances for the same email end with the last write
//! instead of a duplicate-key error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use otp_core::domain::entities::otp_record::OtpRecord;
use otp_core::errors::DomainError;
use otp_core::repositories::OtpRepository;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to OtpRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<OtpRecord, DomainError> {
        Ok(OtpRecord {
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get code: {}", e) })?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get issued_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn find_by_identity(&self, email: &str) -> Result<Option<OtpRecord>, DomainError> {
        let query = r#"
            SELECT email, name, code, issued_at
            FROM otp_codes
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find OTP record: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let query = r#"
            INSERT INTO otp_codes (email, name, code, issued_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                name = VALUES(name),
                code = VALUES(code),
                issued_at = VALUES(issued_at)
        "#;

        sqlx::query(query)
            .bind(&record.email)
            .bind(&record.name)
            .bind(record.code)
            .bind(record.issued_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to create OTP record: {}", e) })?;

        Ok(record)
    }

    async fn update_code(
        &self,
        email: &str,
        code: u16,
        issued_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let query = r#"
            UPDATE otp_codes
            SET code = ?, issued_at = ?
            WHERE email = ?
        "#;

        let result = sqlx::query(query)
            .bind(code)
            .bind(issued_at)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update OTP record: {}", e) })?;

        // SQLx connects with CLIENT_FOUND_ROWS, so this counts matched rows
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "otp record".to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE email = ?")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to delete OTP record: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }
}
