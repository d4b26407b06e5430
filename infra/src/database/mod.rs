//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema setup
//! - Repository implementations for OTP records and courses

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCourseRepository, MySqlOtpRepository};
