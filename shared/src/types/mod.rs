//! Type definitions shared by the API and tooling crates
//!
//! - `response` - the `{ success, message, error }` envelope and health checks

pub mod response;

pub use response::{HealthResponse, HealthStatus, MessageResponse};
