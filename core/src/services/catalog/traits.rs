//! Traits for media hosting integration

use async_trait::async_trait;

use super::types::{UploadRequest, UploadedMedia};

/// Trait for media hosting integration
#[async_trait]
pub trait MediaUploaderTrait: Send + Sync {
    /// Upload one local file, returning its durable URL and public id
    async fn upload(&self, request: &UploadRequest) -> Result<UploadedMedia, String>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
