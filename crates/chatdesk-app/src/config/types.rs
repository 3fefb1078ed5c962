//! Configuration types

use chatdesk_core::{FileValidator, DEFAULT_ACCEPT, DEFAULT_MAX_SIZE_BYTES};
use serde::{Deserialize, Serialize};

use crate::progress::DEFAULT_TICK_MS;
use crate::upload_workflow::DEFAULT_SUCCESS_DWELL_MS;

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub upload: UploadSettings,

    #[serde(default)]
    pub publishing: PublishingSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend connection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Knowledge base upload policy and timing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,

    /// Comma-separated extensions (`.pdf`) or MIME fragments (`text/`)
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Allow more than one file per submission
    #[serde(default)]
    pub multiple: bool,

    #[serde(default = "default_progress_tick_ms")]
    pub progress_tick_ms: u64,

    #[serde(default = "default_success_dwell_ms")]
    pub success_dwell_ms: u64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size_bytes(),
            accept: default_accept(),
            multiple: false,
            progress_tick_ms: default_progress_tick_ms(),
            success_dwell_ms: default_success_dwell_ms(),
        }
    }
}

impl UploadSettings {
    pub fn validator(&self) -> FileValidator {
        FileValidator::new(self.max_size_bytes, self.accept.clone())
    }
}

/// Where the public chatbot pages are served
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishingSettings {
    #[serde(default = "default_public_origin")]
    pub public_origin: String,
}

impl Default for PublishingSettings {
    fn default() -> Self {
        Self {
            public_origin: default_public_origin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before leaving settings with unsaved edits
    #[serde(default = "default_true")]
    pub confirm_discard: bool,

    /// Ask before quitting while an upload is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_discard: true,
            confirm_quit: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    chatdesk_client::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    chatdesk_client::DEFAULT_TIMEOUT_SECS
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_SIZE_BYTES
}

fn default_accept() -> String {
    DEFAULT_ACCEPT.to_string()
}

fn default_progress_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_success_dwell_ms() -> u64 {
    DEFAULT_SUCCESS_DWELL_MS
}

fn default_public_origin() -> String {
    "http://localhost:3000".to_string()
}
