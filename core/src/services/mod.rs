//! Business services containing domain logic and use cases.

pub mod catalog;
pub mod otp;

// Re-export commonly used types
pub use catalog::{CourseSeeder, MediaUploadService, MediaUploaderTrait};
pub use otp::{
    EmailMessage, EmailServiceTrait, IssueCodeCommand, IssuedCode, OtpService, OtpServiceConfig,
    VerifyOutcome,
};
