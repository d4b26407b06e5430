//! # Coursegate Core
//!
//! Core business logic and domain layer for the Coursegate backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. Infrastructure (MySQL, email delivery, media hosting) plugs in
//! through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{CourseRepository, OtpRepository};
pub use services::{
    CourseSeeder, EmailMessage, EmailServiceTrait, IssueCodeCommand, IssuedCode,
    MediaUploadService, MediaUploaderTrait, OtpService, OtpServiceConfig, VerifyOutcome,
};
