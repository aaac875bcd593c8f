//! Client for the remote media host.
//!
//! Accepts file content directly in memory and streams it outward as one
//! multipart request; nothing is spooled to local disk. One upload resolves
//! to one hosted URL; batching is the caller's concern.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

use crate::config::settings;
use crate::error::IntakeError;

#[derive(Clone)]
pub struct MediaUploader {
    http: reqwest::Client,
    endpoint: Url,
    preset: String,
}

/// Subset of the media host's upload response this service reads.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

impl UploadResponse {
    fn hosted_url(self) -> Option<String> {
        self.secure_url.or(self.url)
    }
}

impl MediaUploader {
    pub fn new(endpoint: Url, preset: String) -> Self {
        MediaUploader {
            http: reqwest::Client::new(),
            endpoint,
            preset,
        }
    }

    /// Build the shared client from the environment; start-up only, panics
    /// on an unusable endpoint.
    pub fn from_env() -> Self {
        let cfg = settings();
        let endpoint =
            Url::parse(&cfg.media_upload_url).expect("MEDIA_UPLOAD_URL must be a valid URL");
        Self::new(endpoint, cfg.media_upload_preset.clone())
    }

    /// Upload one in-memory buffer; resolves to its publicly hosted URL.
    pub async fn upload(&self, file_name: String, data: Bytes) -> Result<String, IntakeError> {
        let part = Part::stream(data).file_name(file_name);
        let form = Form::new()
            .text("upload_preset", self.preset.clone())
            .part("file", part);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| IntakeError::Upload(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(IntakeError::Upload(format!(
                "media host rejected upload: {}",
                resp.status()
            )));
        }

        let body: UploadResponse = resp
            .json()
            .await
            .map_err(|e| IntakeError::Upload(format!("unreadable upload response: {e}")))?;

        body.hosted_url()
            .ok_or_else(|| IntakeError::Upload("upload response carried no URL".into()))
    }
}
