//! Media hosting module
//!
//! Signed uploads to a Cloudinary-compatible API, used by the catalog
//! seeding tool.

pub mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryUploader};
