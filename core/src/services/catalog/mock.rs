//! In-memory media uploader for tests

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use super::traits::MediaUploaderTrait;
use super::types::{UploadRequest, UploadedMedia};

/// Uploader that records requests and returns predictable URLs
#[derive(Default)]
pub struct MockMediaUploader {
    pub requests: Arc<Mutex<Vec<UploadRequest>>>,
    /// File names (last path segment) whose upload fails
    failing_files: HashSet<String>,
}

impl MockMediaUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing_files: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<UploadRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl MediaUploaderTrait for MockMediaUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadedMedia, String> {
        let file_name = request
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.requests
            .lock()
            .map_err(|_| "Request log poisoned".to_string())?
            .push(request.clone());

        if self.failing_files.contains(&file_name) {
            return Err(format!("Upload rejected: {}", file_name));
        }

        let public_id = match &request.public_id {
            Some(id) => format!("{}/{}", request.folder, id),
            None => format!("{}/{}", request.folder, file_name),
        };
        Ok(UploadedMedia {
            url: format!(
                "https://media.test/{}/upload/{}",
                request.resource_type.as_str(),
                public_id
            ),
            public_id,
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
