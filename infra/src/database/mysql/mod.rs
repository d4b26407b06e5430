//! MySQL repository implementations

pub mod course_repository_impl;
pub mod otp_repository_impl;

pub use course_repository_impl::MySqlCourseRepository;
pub use otp_repository_impl::MySqlOtpRepository;
