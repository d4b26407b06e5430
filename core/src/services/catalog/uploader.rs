//! Upload step of the seeding batch

use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing;

use super::traits::MediaUploaderTrait;
use super::types::{
    ManifestEntry, ResourceType, UploadReport, UploadRequest, UploadedFile,
};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("regex is valid"));

/// Public id given to raw uploads: the course name with whitespace runs
/// replaced by `_`
pub fn raw_public_id(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, "_").into_owned()
}

/// Uploads manifest files one at a time
pub struct MediaUploadService<M>
where
    M: MediaUploaderTrait + ?Sized,
{
    uploader: Arc<M>,
}

impl<M> MediaUploadService<M>
where
    M: MediaUploaderTrait + ?Sized,
{
    pub fn new(uploader: Arc<M>) -> Self {
        Self { uploader }
    }

    /// Build the request for one entry
    pub fn request_for(entry: &ManifestEntry, base_dir: &Path) -> UploadRequest {
        let raw = entry.resource_type == ResourceType::Raw;
        UploadRequest {
            path: base_dir.join(&entry.file_name),
            folder: entry.folder.clone(),
            resource_type: entry.resource_type,
            public_id: raw.then(|| raw_public_id(&entry.name)),
            format: raw.then(|| "pdf".to_string()),
        }
    }

    /// Upload every entry under `base_dir`
    ///
    /// Missing files are skipped and upload errors are counted; neither stops
    /// the batch.
    pub async fn upload_all(&self, entries: &[ManifestEntry], base_dir: &Path) -> UploadReport {
        let mut report = UploadReport::default();
        let total = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            let request = Self::request_for(entry, base_dir);

            let exists = tokio::fs::metadata(&request.path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !exists {
                tracing::warn!(
                    position = index + 1,
                    total = total,
                    path = %request.path.display(),
                    event = "media_skipped",
                    "File not found, skipping"
                );
                report.skipped += 1;
                continue;
            }

            match self.uploader.upload(&request).await {
                Ok(media) => {
                    tracing::info!(
                        position = index + 1,
                        total = total,
                        kind = %entry.kind,
                        name = %entry.name,
                        url = %media.url,
                        public_id = %media.public_id,
                        provider = self.uploader.provider_name(),
                        event = "media_uploaded",
                        "Uploaded file"
                    );
                    report.uploaded.push(UploadedFile {
                        name: entry.name.clone(),
                        kind: entry.kind,
                        file_name: entry.file_name.clone(),
                        url: media.url,
                        public_id: media.public_id,
                    });
                }
                Err(e) => {
                    tracing::error!(
                        position = index + 1,
                        total = total,
                        file_name = %entry.file_name,
                        error = %e,
                        event = "media_upload_failed",
                        "Failed to upload file"
                    );
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            uploaded = report.uploaded.len(),
            skipped = report.skipped,
            failed = report.failed,
            event = "media_batch_completed",
            "Upload completed"
        );

        report
    }
}
