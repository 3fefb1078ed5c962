//! Small shared domain enums

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Loading the company record
    #[default]
    Initializing,
    /// Interactive
    Running,
    /// Shutting down
    Quitting,
}

/// What the upload modal is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadMode {
    /// Documents from disk
    #[default]
    File,
    /// Raw text typed or pasted into the form
    Text,
}

impl UploadMode {
    pub fn label(&self) -> &'static str {
        match self {
            UploadMode::File => "Upload Files",
            UploadMode::Text => "Add Text",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UploadMode::File => UploadMode::Text,
            UploadMode::Text => UploadMode::File,
        }
    }
}

/// Severity of a status-line notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-line message shown to the user in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_mode_toggle() {
        assert_eq!(UploadMode::File.toggled(), UploadMode::Text);
        assert_eq!(UploadMode::Text.toggled(), UploadMode::File);
    }

    #[test]
    fn test_upload_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UploadMode::Text).unwrap(), "\"text\"");
    }
}
