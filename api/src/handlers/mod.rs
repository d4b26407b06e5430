//! Response mapping shared by the route handlers

pub mod error;

pub use error::{json_config, OtpReply};
