//! Course catalog seeding
//!
//! A linear batch over a manifest: upload local media through a
//! `MediaUploaderTrait`, fold the resulting URLs into course drafts, then
//! insert the courses through a `CourseRepository`.

mod seeder;
mod traits;
mod types;
mod uploader;

pub mod mock;

#[cfg(test)]
mod tests;

pub use seeder::{apply_uploads, CourseSeeder};
pub use traits::MediaUploaderTrait;
pub use types::{
    CatalogManifest, ManifestEntry, MediaKind, ResourceType, SeedReport, UploadReport,
    UploadRequest, UploadedFile, UploadedMedia,
};
pub use uploader::{raw_public_id, MediaUploadService};
