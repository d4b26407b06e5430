//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `otp_core`.
//!
//! ## Architecture
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: SendGrid v3 client and a console mock for development
//! - **Media**: Cloudinary signed upload client used by the seeding tool

// Re-export core types for convenience
pub use otp_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email delivery module
pub mod email;

/// Media hosting module
pub mod media;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider rejected or failed a delivery
    #[error("Email service error: {0}")]
    Email(String),

    /// Media host rejected or failed an upload
    #[error("Media service error: {0}")]
    Media(String),

    /// Local file access error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
