//! Image upload to the external object-storage service.
//!
//! The storage endpoint accepts an unauthenticated multipart POST with the
//! file plus preset fields and answers `{"secure_url": ...}`. Replacement
//! images are uploaded before the catalog update so the new URL can travel in
//! the same payload.

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::UploadConfig;

/// Errors that can occur while uploading an image.
#[derive(Debug, Error)]
pub enum UploadError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storage service refused the file.
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// Success response did not carry a usable URL.
    #[error("Malformed upload response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Client for the object-storage upload endpoint.
#[derive(Clone)]
pub struct ImageUploader {
    inner: Arc<ImageUploaderInner>,
}

struct ImageUploaderInner {
    client: reqwest::Client,
    config: UploadConfig,
}

impl ImageUploader {
    /// Create a new uploader.
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            inner: Arc::new(ImageUploaderInner {
                client: reqwest::Client::new(),
                config: config.clone(),
            }),
        }
    }

    /// Upload one file and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service rejects the file,
    /// or the response carries no `secure_url`.
    #[instrument(skip(self, bytes), fields(filename = %filename, size = bytes.len()))]
    pub async fn upload(
        &self,
        filename: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let mut part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_owned());
        if let Some(content_type) = content_type {
            part = part.mime_str(content_type)?;
        }

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.inner.config.preset.clone())
            .text("cloud_name", self.inner.config.cloud_name.clone());

        let response = self
            .inner
            .client
            .post(&self.inner.config.url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The storage service reports failures as {"error": {"message": ...}}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error")?.get("message")?.as_str().map(String::from))
                .unwrap_or_else(|| format!("upload failed with status {status}"));
            return Err(UploadError::Rejected(message));
        }

        let parsed: UploadResponse = serde_json::from_str(&body)?;
        Ok(parsed.secure_url)
    }
}
