//! HTTP middleware configuration

pub mod cors;

pub use cors::{create_cors, CorsConfig};
