//! Shared utilities and common types for the Coursegate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The `{ success, message, error }` response envelope
//! - Identity (email) utilities

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    DatabaseConfig, EmailConfig, EmailProvider, Environment, LoggingConfig, MediaConfig,
    OtpConfig, ServerConfig,
};
pub use types::{HealthResponse, MessageResponse};
pub use utils::validation;
