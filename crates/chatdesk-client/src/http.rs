//! reqwest implementation of [`DashboardApi`].

use std::time::Duration;

use chatdesk_core::prelude::*;
use chatdesk_core::{
    BatchUpdateSettingsRequest, BatchUpdateSettingsResponse, CandidateFile, Company,
    TextUploadRequest, UploadReceipt,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::DashboardApi;

/// Default backend location when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const UPLOAD_PATH: &str = "/knowledge-base/upload";
const UPLOAD_TEXT_PATH: &str = "/knowledge-base/upload-text";
const SETTINGS_PATH: &str = "/auth/company/settings";
const COMPANY_PATH: &str = "/auth/company/me";

/// HTTP client for the chatbot backend with bearer-token auth.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to create HTTP client: {}", e)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let response = check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| Error::http(format!("Failed to parse response as JSON: {}", e)))
    }
}

/// Turn a non-success response into [`Error::Api`], preferring the
/// backend's `detail` string.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_detail(&body)
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    warn!("API request failed with status {}: {}", status, body);
    Err(Error::api(status.as_u16(), message))
}

/// Extract `detail` from an error body when it is a plain string.
///
/// Validation errors from the backend carry a list in `detail`; those fall
/// back to the generic status message.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(|s| s.to_string())
}

impl DashboardApi for HttpClient {
    async fn upload_file(&self, file: &CandidateFile) -> Result<UploadReceipt> {
        let bytes = tokio::fs::read(&file.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::file_not_found(&file.path),
            _ => Error::Io(e),
        })?;

        debug!("Uploading {} ({} bytes)", file.name, bytes.len());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| Error::upload(format!("Invalid MIME type {}: {}", file.mime_type, e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let request = self.client.post(self.build_url(UPLOAD_PATH)).multipart(form);
        self.send_json(request).await
    }

    async fn upload_text(&self, content: &str, filename: &str) -> Result<UploadReceipt> {
        let body = TextUploadRequest {
            content: content.to_string(),
            filename: filename.to_string(),
        };

        debug!("Uploading text content as {}", filename);

        let request = self.client.post(self.build_url(UPLOAD_TEXT_PATH)).json(&body);
        self.send_json(request).await
    }

    async fn update_settings(
        &self,
        request: &BatchUpdateSettingsRequest,
    ) -> Result<BatchUpdateSettingsResponse> {
        let request = self.client.put(self.build_url(SETTINGS_PATH)).json(request);
        self.send_json(request).await
    }

    async fn fetch_company(&self) -> Result<Company> {
        let request = self.client.get(self.build_url(COMPANY_PATH));
        self.send_json(request).await
    }
}
