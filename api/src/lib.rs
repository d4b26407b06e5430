//! HTTP API for email OTP issuance and verification
//!
//! Library half of the `otp_api` crate, shared by the server binary, the
//! `seed_courses` tool and the integration tests.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
