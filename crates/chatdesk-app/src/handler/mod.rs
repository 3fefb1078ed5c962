//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `upload`: Upload modal handlers
//! - `settings`: Settings screen handlers

pub(crate) mod keys;
pub(crate) mod settings;
pub(crate) mod update;
pub(crate) mod upload;

#[cfg(test)]
mod tests;

use std::time::Duration;

use chatdesk_core::{BatchUpdateSettingsRequest, CandidateFile};

use crate::message::Message;
use crate::upload_workflow::UploadId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// What a single submission sends to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadJob {
    /// Queued files, uploaded one after another
    Files(Vec<CandidateFile>),
    /// Raw text with a normalized filename
    Text { content: String, filename: String },
}

impl UploadJob {
    /// Display names of the documents in this job
    pub fn names(&self) -> Vec<String> {
        match self {
            UploadJob::Files(files) => files.iter().map(|f| f.name.clone()).collect(),
            UploadJob::Text { filename, .. } => vec![filename.clone()],
        }
    }
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Fetch the company record
    FetchCompany,

    /// Run one submission and drive its simulated progress.
    ///
    /// The task emits `UploadProgressTick` every `tick` until the request
    /// resolves, then exactly one of `UploadSucceeded` / `UploadFailed`.
    StartUpload {
        upload_id: UploadId,
        job: UploadJob,
        tick: Duration,
    },

    /// Send the changed settings fields in one request
    SaveSettings { request: BatchUpdateSettingsRequest },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
