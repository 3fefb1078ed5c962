//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use chatdesk_core::{BatchUpdateSettingsResponse, Company};

use crate::input_key::InputKey;
use crate::upload_workflow::UploadId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste (also how terminals deliver drag-and-drop)
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may ask first when an upload is in flight)
    RequestQuit,

    /// Quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    // ─────────────────────────────────────────────────────────
    // Company Record
    // ─────────────────────────────────────────────────────────
    /// Fetch the company record again
    RefreshCompany,

    CompanyLoaded(Company),

    CompanyLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Upload Modal
    // ─────────────────────────────────────────────────────────
    OpenUploadModal,

    CloseUploadModal,

    /// Switch between file and text mode
    ToggleUploadMode,

    /// Character typed into the active modal input
    UploadInputChar(char),

    UploadInputBackspace,

    /// Clear the active modal input
    UploadInputClear,

    /// Line break inside the text content
    UploadInputNewline,

    /// Move focus between filename and content (text mode)
    UploadSwitchField,

    /// Queue the paths typed into the path input as one batch
    UploadAddPaths,

    /// A batch of paths from a paste/drop
    FilesDropped { paths: Vec<PathBuf> },

    UploadSelectNext,

    UploadSelectPrev,

    UploadRemoveSelected,

    /// Submit the queue (file mode) or the form (text mode)
    UploadSubmit,

    /// Simulated progress step for an in-flight upload
    UploadProgressTick { upload_id: UploadId, increment: f64 },

    UploadSucceeded {
        upload_id: UploadId,
        /// Names of the documents the backend accepted
        uploaded: Vec<String>,
    },

    UploadFailed {
        upload_id: UploadId,
        /// Documents accepted before the failure (batch uploads)
        uploaded: Vec<String>,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Settings Messages
    // ─────────────────────────────────────────────────────────
    ShowSettings,

    /// Leave settings (asks first when there are unsaved edits)
    HideSettings,

    /// Leave settings and drop unsaved edits
    ForceHideSettings,

    SettingsSaveAndClose,

    SettingsNextItem,

    SettingsPrevItem,

    /// Start editing the selected item, or toggle it if boolean
    SettingsToggleEdit,

    SettingsToggleBool,

    SettingsCharInput(char),

    SettingsBackspace,

    SettingsClearBuffer,

    SettingsCommitEdit,

    SettingsCancelEdit,

    /// Send the changed fields to the backend
    SettingsSave,

    /// Drop all unsaved edits
    SettingsDiscard,

    SettingsSaved { response: BatchUpdateSettingsResponse },

    SettingsSaveFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Confirm Dialog
    // ─────────────────────────────────────────────────────────
    ConfirmDialogNext,

    ConfirmDialogPrev,

    /// Pick the highlighted option
    ConfirmDialogConfirm,

    /// Pick an option by position
    ConfirmDialogSelect(usize),

    ConfirmDialogCancel,
}
