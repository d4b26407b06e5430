//! Main OTP service implementation

use chrono::Utc;
use std::future::Future;
use std::sync::Arc;
use tracing;

use otp_shared::utils::validation::{mask_email, normalize_identity};

use crate::domain::entities::otp_record::{OtpRecord, SubmittedCode};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::OtpRepository;

use super::config::OtpServiceConfig;
use super::message::render_otp_email;
use super::traits::EmailServiceTrait;
use super::types::{IssueCodeCommand, IssuedCode, VerifyOutcome};

/// OTP service for issuing and verifying email passcodes
pub struct OtpService<R, E>
where
    R: OtpRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    /// Store holding one record per email
    repository: Arc<R>,
    /// Email delivery
    email_service: Arc<E>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R, E> OtpService<R, E>
where
    R: OtpRepository + ?Sized,
    E: EmailServiceTrait + ?Sized,
{
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Store implementation
    /// * `email_service` - Email delivery implementation
    /// * `config` - Service configuration
    pub fn new(repository: Arc<R>, email_service: Arc<E>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            email_service,
            config,
        }
    }

    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a code to an email address
    ///
    /// This method:
    /// 1. Rejects a missing or blank email before touching any collaborator
    /// 2. Generates a new code in `1000..=9999`
    /// 3. Creates the record, or overwrites code and issue time of the existing one
    /// 4. Emails the code
    ///
    /// The record is written before the email is sent, so a delivery failure
    /// still leaves the new code valid in the store.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedCode)` - The stored code and provider message id
    /// * `Err(DomainError::Validation)` - No email supplied
    /// * `Err(DomainError::Internal)` - Store or delivery failure
    pub async fn issue_code(&self, command: IssueCodeCommand) -> DomainResult<IssuedCode> {
        let email = normalize_identity(command.email.as_deref())
            .ok_or_else(|| DomainError::validation("Email is required"))?;
        let name = command.name;

        let code = Self::generate_code();
        let issued_at = Utc::now();

        let existing = self
            .call("otp_lookup", self.repository.find_by_identity(&email))
            .await?;

        let refreshed = match existing {
            None => {
                let record = OtpRecord::new(email.clone(), name.clone(), code, issued_at);
                self.call("otp_create", self.repository.create(record)).await?;
                false
            }
            Some(_) => {
                self.call(
                    "otp_update",
                    self.repository.update_code(&email, code, issued_at),
                )
                .await?;
                true
            }
        };

        tracing::info!(
            email = %mask_email(&email),
            refreshed = refreshed,
            event = "otp_stored",
            "Stored verification code"
        );

        let message = render_otp_email(
            &email,
            &self.config.sender,
            name.as_deref(),
            code,
            self.config.code_ttl_minutes,
        );

        let message_id = self
            .call("otp_email", async {
                self.email_service
                    .send(&message)
                    .await
                    .map_err(|e| DomainError::internal(format!("Failed to send email: {}", e)))
            })
            .await?;

        tracing::info!(
            email = %mask_email(&email),
            provider = self.email_service.provider_name(),
            message_id = %message_id,
            event = "otp_issued",
            "Verification code emailed"
        );

        Ok(IssuedCode {
            expires_at: OtpRecord::expiry_after(issued_at, self.config.code_ttl_minutes),
            email,
            code,
            refreshed,
            issued_at,
            message_id,
        })
    }

    /// Check a submitted code against the current code for an email
    ///
    /// A missing or blank email is reported as `NotFound` without a lookup.
    /// With the default configuration this is read-only, so a correct code
    /// keeps verifying until the next issuance replaces it.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOutcome)` - `Verified`, `Mismatch`, `NotFound`, or `Expired`
    /// * `Err(DomainError::Internal)` - Store failure
    pub async fn verify_code(
        &self,
        email: Option<&str>,
        submitted: &SubmittedCode,
    ) -> DomainResult<VerifyOutcome> {
        let Some(email) = normalize_identity(email) else {
            tracing::debug!(event = "otp_verify_without_email", "Verification without email");
            return Ok(VerifyOutcome::NotFound);
        };

        let record = self
            .call("otp_lookup", self.repository.find_by_identity(&email))
            .await?;

        let outcome = match record {
            None => VerifyOutcome::NotFound,
            Some(record)
                if self.config.enforce_expiry
                    && record.is_expired_at(Utc::now(), self.config.code_ttl_minutes) =>
            {
                VerifyOutcome::Expired
            }
            Some(record) if Self::code_matches(&record, submitted) => {
                if self.config.consume_on_success {
                    self.call("otp_consume", self.repository.delete(&email))
                        .await?;
                }
                VerifyOutcome::Verified
            }
            Some(_) => VerifyOutcome::Mismatch,
        };

        match outcome {
            VerifyOutcome::Verified => tracing::info!(
                email = %mask_email(&email),
                event = "otp_verified_success",
                "Verification code verified"
            ),
            _ => tracing::warn!(
                email = %mask_email(&email),
                outcome = outcome.as_str(),
                event = "otp_verification_failed",
                "Verification code rejected"
            ),
        }

        Ok(outcome)
    }

    /// Generate a code uniformly from `1000..=9999`
    pub fn generate_code() -> u16 {
        OtpRecord::generate_code()
    }

    /// Value comparison between the stored code and a submission
    pub fn code_matches(record: &OtpRecord, submitted: &SubmittedCode) -> bool {
        record.matches(submitted)
    }

    /// Run a collaborator call under the configured timeout
    async fn call<T, F>(&self, operation: &'static str, future: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        let limit = self.config.collaborator_timeout;
        match tokio::time::timeout(limit, future).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(
                    operation = operation,
                    error = %e,
                    event = "otp_collaborator_failed",
                    "Collaborator call failed"
                );
                Err(match e {
                    DomainError::Internal { .. } => e,
                    other => DomainError::internal(other.detail().to_string()),
                })
            }
            Err(_) => {
                tracing::error!(
                    operation = operation,
                    timeout_ms = limit.as_millis() as u64,
                    event = "otp_collaborator_timeout",
                    "Collaborator call timed out"
                );
                Err(DomainError::internal(format!(
                    "{} timed out after {}ms",
                    operation,
                    limit.as_millis()
                )))
            }
        }
    }
}
