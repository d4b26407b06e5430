//! One-time passcode lifecycle
//!
//! Issues a 4-digit code per email (create or overwrite), emails it, and
//! checks submissions against the single current code:
//! - `NoRecord -> Active` on first issuance
//! - `Active -> Active` (new code) on every later issuance
//! - verification is read-only unless single-use is configured

mod config;
mod message;
mod service;
mod traits;
mod types;

pub mod mock;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use message::render_otp_email;
pub use service::OtpService;
pub use traits::{EmailMessage, EmailServiceTrait};
pub use types::{IssueCodeCommand, IssuedCode, VerifyOutcome};
