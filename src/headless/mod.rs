//! Headless upload mode - NDJSON event output instead of the TUI
//!
//! `chatdesk upload` runs one submission through the same queue, validator
//! and progress simulator as the upload modal, and reports what happens as
//! newline-delimited JSON on stdout:
//!
//! ```json
//! {"event":"file_rejected","error":"File \"a.exe\" has an invalid type. ...","timestamp":1704700001000}
//! {"event":"upload_started","documents":["guide.pdf"],"timestamp":1704700001010}
//! {"event":"progress","percent":27,"timestamp":1704700001310}
//! {"event":"upload_succeeded","uploaded":["guide.pdf"],"timestamp":1704700002000}
//! ```

pub mod runner;

pub use runner::{run_headless_upload, HeadlessUpload};

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A path was refused by the validator (or could not be read)
    FileRejected { error: String, timestamp: i64 },

    /// Request sent to the backend
    UploadStarted {
        documents: Vec<String>,
        timestamp: i64,
    },

    /// Simulated progress while the request is pending
    Progress { percent: u16, timestamp: i64 },

    UploadSucceeded {
        uploaded: Vec<String>,
        timestamp: i64,
    },

    UploadFailed {
        uploaded: Vec<String>,
        error: String,
        timestamp: i64,
    },

    /// Anything that stops the command before or outside the upload
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json).and_then(|()| stdout.flush()) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn file_rejected(error: &str) -> Self {
        Self::FileRejected {
            error: error.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn upload_started(documents: Vec<String>) -> Self {
        Self::UploadStarted {
            documents,
            timestamp: Self::now(),
        }
    }

    pub fn progress(percent: u16) -> Self {
        Self::Progress {
            percent,
            timestamp: Self::now(),
        }
    }

    pub fn upload_succeeded(uploaded: Vec<String>) -> Self {
        Self::UploadSucceeded {
            uploaded,
            timestamp: Self::now(),
        }
    }

    pub fn upload_failed(uploaded: Vec<String>, error: String) -> Self {
        Self::UploadFailed {
            uploaded,
            error,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}
