//! Repository interfaces for persistence, plus in-memory implementations
//! used by tests and local tooling.

pub mod course;
pub mod otp;

pub use course::CourseRepository;
pub use otp::OtpRepository;

/// In-memory repositories
pub mod mock {
    pub use super::course::mock::MockCourseRepository;
    pub use super::otp::mock::MockOtpRepository;
}
