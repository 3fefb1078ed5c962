//! The backend operations chatdesk depends on.
//!
//! The app layer is generic over [`DashboardApi`] so tests can drive the whole
//! upload and settings flow against [`crate::test_utils::MockApi`] instead of
//! a live server.

use chatdesk_core::{
    BatchUpdateSettingsRequest, BatchUpdateSettingsResponse, CandidateFile, Company, Result,
    UploadReceipt,
};

/// Backend collaborator for the knowledge base and company settings.
///
/// `DashboardApi` is the `Send` variant used from tokio tasks;
/// `LocalDashboardApi` is generated alongside it for single-threaded callers.
#[trait_variant::make(DashboardApi: Send)]
pub trait LocalDashboardApi {
    /// Submit one document for ingestion. Resolves once the backend accepted it.
    async fn upload_file(&self, file: &CandidateFile) -> Result<UploadReceipt>;

    /// Submit raw text content under a filename.
    async fn upload_text(&self, content: &str, filename: &str) -> Result<UploadReceipt>;

    /// Send only the changed settings fields; returns the canonical record.
    async fn update_settings(
        &self,
        request: &BatchUpdateSettingsRequest,
    ) -> Result<BatchUpdateSettingsResponse>;

    /// Fetch the authoritative company record.
    async fn fetch_company(&self) -> Result<Company>;
}
