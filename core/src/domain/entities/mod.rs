//! Domain entities representing core business objects.

pub mod course;
pub mod otp_record;

// Re-export commonly used types
pub use course::{Course, CourseDraft, PLACEHOLDER_MARKER};
pub use otp_record::{
    OtpRecord, SubmittedCode, CODE_MAX, CODE_MIN, DEFAULT_EXPIRATION_MINUTES,
};
