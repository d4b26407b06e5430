//! Cloudinary Upload Implementation
//!
//! Uploads are signed: the request parameters are sorted by name, joined as
//! `key=value` pairs with `&`, suffixed with the API secret and hashed with
//! SHA-256. The secret itself never leaves the process.

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, error};

use otp_core::services::catalog::{MediaUploaderTrait, UploadRequest, UploadedMedia};
use otp_shared::config::MediaConfig;

use crate::InfrastructureError;

/// Cloudinary service configuration
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Timeout for upload requests in seconds
    pub request_timeout_secs: u64,
}

impl TryFrom<&MediaConfig> for CloudinaryConfig {
    type Error = InfrastructureError;

    fn try_from(config: &MediaConfig) -> Result<Self, Self::Error> {
        config.validate().map_err(InfrastructureError::Config)?;

        Ok(Self {
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Sign a set of upload parameters
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let joined = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Cloudinary uploader
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from the shared media configuration
    pub fn from_config(config: &MediaConfig) -> Result<Self, InfrastructureError> {
        Self::new(CloudinaryConfig::try_from(config)?)
    }

    pub fn endpoint(&self, request: &UploadRequest) -> String {
        format!(
            "{}/v1_1/{}/{}/upload",
            self.config.base_url,
            self.config.cloud_name,
            request.resource_type.as_str()
        )
    }

    /// Parameters that take part in the signature
    pub fn signed_params(request: &UploadRequest, timestamp: i64) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        params.insert("timestamp", timestamp.to_string());
        if !request.folder.is_empty() {
            params.insert("folder", request.folder.clone());
        }
        if let Some(public_id) = &request.public_id {
            params.insert("public_id", public_id.clone());
        }
        if let Some(format) = &request.format {
            params.insert("format", format.clone());
        }
        params
    }

    /// Upload one file
    pub async fn upload_file(&self, request: &UploadRequest) -> Result<UploadedMedia, InfrastructureError> {
        let bytes = tokio::fs::read(&request.path).await?;
        let file_name = request
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let params = Self::signed_params(request, chrono::Utc::now().timestamp());
        let signature = sign_params(&params, &self.config.api_secret);

        let mut form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(file_name.clone()))
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in params {
            form = form.text(key, value);
        }

        debug!(file_name = %file_name, endpoint = %self.endpoint(request), "Uploading media");

        let response = self
            .client
            .post(self.endpoint(request))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            error!(file_name = %file_name, status = status.as_u16(), "Media upload rejected");
            return Err(InfrastructureError::Media(format!(
                "Cloudinary API error {}: {}",
                status, message
            )));
        }

        let uploaded: UploadResponse = response.json().await?;
        Ok(UploadedMedia {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}

#[async_trait]
impl MediaUploaderTrait for CloudinaryUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<UploadedMedia, String> {
        self.upload_file(request).await.map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "cloudinary"
    }
}
