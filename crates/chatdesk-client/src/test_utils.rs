//! Test utilities for the dashboard API
//!
//! Provides [`MockApi`], a recording in-memory backend, and small builders
//! for test fixtures.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chatdesk_core::{
    BatchUpdateSettingsRequest, BatchUpdateSettingsResponse, CandidateFile, Company, Error,
    Result, UploadReceipt,
};

use crate::api::DashboardApi;

/// One call observed by [`MockApi`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    UploadFile { name: String },
    UploadText { content: String, filename: String },
    UpdateSettings(BatchUpdateSettingsRequest),
    FetchCompany,
}

#[derive(Debug, Default)]
struct MockInner {
    company: Company,
    calls: Vec<RecordedCall>,
    /// Scripted failures consumed by the next upload calls (`None` = succeed)
    upload_outcomes: VecDeque<Option<String>>,
    settings_failure: Option<String>,
    delay: Duration,
}

/// In-memory backend that records calls and replays scripted failures.
///
/// Clones share state, so a test can keep one handle while the app owns
/// another.
#[derive(Debug, Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<MockInner>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_company(company: Company) -> Self {
        let api = Self::new();
        api.lock().company = company;
        api
    }

    /// Delay every call by `delay` (use with paused tokio time).
    pub fn with_delay(self, delay: Duration) -> Self {
        self.lock().delay = delay;
        self
    }

    /// The next upload call fails with `detail`.
    pub fn fail_next_upload(&self, detail: impl Into<String>) {
        self.lock().upload_outcomes.push_back(Some(detail.into()));
    }

    /// The next upload call succeeds (useful to script mixed batches).
    pub fn succeed_next_upload(&self) {
        self.lock().upload_outcomes.push_back(None);
    }

    /// Every settings update fails with `detail` until cleared.
    pub fn fail_settings(&self, detail: Option<String>) {
        self.lock().settings_failure = detail;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    pub fn company(&self) -> Company {
        self.lock().company.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockInner> {
        // A poisoned lock only happens after a test already panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: RecordedCall) -> Duration {
        let mut inner = self.lock();
        inner.calls.push(call);
        inner.delay
    }

    fn next_upload_outcome(&self) -> Result<UploadReceipt> {
        match self.lock().upload_outcomes.pop_front().flatten() {
            Some(detail) => Err(Error::api(400, detail)),
            None => Ok(UploadReceipt {
                message: Some("Document uploaded".to_string()),
                ..Default::default()
            }),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl DashboardApi for MockApi {
    async fn upload_file(&self, file: &CandidateFile) -> Result<UploadReceipt> {
        let delay = self.record(RecordedCall::UploadFile {
            name: file.name.clone(),
        });
        pause(delay).await;
        self.next_upload_outcome().map(|receipt| UploadReceipt {
            filename: Some(file.name.clone()),
            ..receipt
        })
    }

    async fn upload_text(&self, content: &str, filename: &str) -> Result<UploadReceipt> {
        let delay = self.record(RecordedCall::UploadText {
            content: content.to_string(),
            filename: filename.to_string(),
        });
        pause(delay).await;
        self.next_upload_outcome().map(|receipt| UploadReceipt {
            filename: Some(filename.to_string()),
            ..receipt
        })
    }

    async fn update_settings(
        &self,
        request: &BatchUpdateSettingsRequest,
    ) -> Result<BatchUpdateSettingsResponse> {
        let delay = self.record(RecordedCall::UpdateSettings(request.clone()));
        pause(delay).await;

        let mut inner = self.lock();
        if let Some(detail) = &inner.settings_failure {
            return Err(Error::api(400, detail.clone()));
        }

        let company = &mut inner.company;
        if let Some(slug) = &request.slug {
            company.slug = Some(slug.clone());
        }
        if let Some(title) = &request.chatbot_title {
            company.chatbot_title = Some(title.clone());
        }
        if let Some(description) = &request.chatbot_description {
            company.chatbot_description = Some(description.clone());
        }
        if let Some(published) = request.is_published {
            company.is_published = Some(published);
        }

        Ok(BatchUpdateSettingsResponse {
            message: "Settings updated".to_string(),
            company: company.clone(),
        })
    }

    async fn fetch_company(&self) -> Result<Company> {
        let delay = self.record(RecordedCall::FetchCompany);
        pause(delay).await;
        Ok(self.company())
    }
}

/// A company with a name, email and nothing else configured.
pub fn test_company(name: &str) -> Company {
    Company {
        id: Some(serde_json::json!("company-1")),
        name: name.to_string(),
        email: format!("owner@{}.test", name.to_lowercase()),
        ..Default::default()
    }
}

/// A candidate file that does not exist on disk.
pub fn test_file(name: &str, size: u64) -> CandidateFile {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    CandidateFile::new(
        name,
        size,
        chatdesk_core::mime_for_extension(extension.as_deref()),
        format!("/fixtures/{}", name),
    )
}
