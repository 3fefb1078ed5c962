//! Application state (the Model in TEA)

use std::time::Duration;

use chrono::{DateTime, Local};

use chatdesk_core::{AppPhase, FileValidator, Notice, UploadMode};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::remote_settings::CompanyState;
use crate::settings_tracker::SettingsChangeTracker;
use crate::upload_workflow::{UploadId, UploadModalState};

/// Maximum entries kept in the recent uploads list
pub const MAX_RECENT_UPLOADS: usize = 50;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Waiting for the first company record
    #[default]
    Loading,

    /// Knowledge base screen
    KnowledgeBase,

    /// Upload modal over the knowledge base screen
    UploadModal,

    /// Company settings screen
    Settings,

    /// Confirmation dialog over whatever was active
    ConfirmDialog,
}

/// A document submitted during this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentUpload {
    pub name: String,
    pub mode: UploadMode,
    pub uploaded_at: DateTime<Local>,
}

/// State for the settings screen
#[derive(Debug, Clone, Default)]
pub struct SettingsViewState {
    /// Currently selected item index
    pub selected_index: usize,

    /// Whether we're in edit mode for the current item
    pub editing: bool,

    /// Text buffer for string editing
    pub edit_buffer: String,

    /// Inline hint or error for the selected item
    pub error: Option<String>,

    /// Leave the screen once the pending save succeeds
    pub close_after_save: bool,
}

impl SettingsViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select next item
    pub fn select_next(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = (self.selected_index + 1) % item_count;
        }
        self.error = None;
    }

    /// Select previous item
    pub fn select_previous(&mut self, item_count: usize) {
        if item_count > 0 {
            self.selected_index = if self.selected_index == 0 {
                item_count - 1
            } else {
                self.selected_index - 1
            };
        }
        self.error = None;
    }

    /// Enter edit mode
    pub fn start_editing(&mut self, initial_value: &str) {
        self.editing = true;
        self.edit_buffer = initial_value.to_string();
        self.error = None;
    }

    /// Exit edit mode
    pub fn stop_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Current application phase
    pub phase: AppPhase,

    /// Settings from config file
    pub settings: Settings,

    /// Upload policy derived from `settings.upload`
    pub validator: FileValidator,

    /// Upload modal (kept while closed so the chosen mode persists)
    pub upload_modal: UploadModalState,

    /// Canonical company record and request flags
    pub company: CompanyState,

    /// Settings form working copy vs. baseline
    pub settings_tracker: SettingsChangeTracker,

    /// Settings screen view state
    pub settings_view_state: SettingsViewState,

    /// Confirmation dialog state
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Documents uploaded during this session, newest first
    pub recent_uploads: Vec<RecentUpload>,

    /// Status line notice
    pub notice: Option<Notice>,

    next_upload_id: UploadId,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let upload_modal = UploadModalState::new(
            settings.upload.multiple,
            Duration::from_millis(settings.upload.success_dwell_ms),
        );

        Self {
            ui_mode: UiMode::Loading,
            phase: AppPhase::Initializing,
            validator: settings.upload.validator(),
            upload_modal,
            company: CompanyState::default(),
            settings_tracker: SettingsChangeTracker::default(),
            settings_view_state: SettingsViewState::new(),
            confirm_dialog_state: None,
            recent_uploads: Vec::new(),
            notice: None,
            next_upload_id: 0,
            settings,
        }
    }

    /// Progress timer period for uploads
    pub fn progress_tick(&self) -> Duration {
        Duration::from_millis(self.settings.upload.progress_tick_ms)
    }

    /// Allocate the id of the next submission
    pub fn next_upload_id(&mut self) -> UploadId {
        self.next_upload_id += 1;
        self.next_upload_id
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn record_uploads(&mut self, names: &[String], mode: UploadMode) {
        let now = Local::now();
        for name in names {
            self.recent_uploads.insert(
                0,
                RecentUpload {
                    name: name.clone(),
                    mode,
                    uploaded_at: now,
                },
            );
        }
        self.recent_uploads.truncate(MAX_RECENT_UPLOADS);
    }

    // ─────────────────────────────────────────────────────────
    // Screen transitions
    // ─────────────────────────────────────────────────────────

    pub fn show_settings(&mut self) {
        self.settings_view_state = SettingsViewState::new();
        self.ui_mode = UiMode::Settings;
    }

    pub fn hide_settings(&mut self) {
        self.settings_view_state = SettingsViewState::new();
        self.ui_mode = UiMode::KnowledgeBase;
    }

    pub fn show_confirm_dialog(&mut self, dialog: ConfirmDialogState) {
        self.confirm_dialog_state = Some(dialog);
        self.ui_mode = UiMode::ConfirmDialog;
    }

    /// Close the dialog and go back to where it was opened
    pub fn dismiss_confirm_dialog(&mut self) {
        if let Some(dialog) = self.confirm_dialog_state.take() {
            self.ui_mode = dialog.return_mode;
        }
    }

    /// Whether an upload request is still in flight
    pub fn upload_in_flight(&self) -> bool {
        self.upload_modal.is_loading()
    }

    /// Request quit, asking first when an upload would be abandoned
    pub fn request_quit(&mut self) {
        if self.upload_in_flight() && self.settings.behavior.confirm_quit {
            let return_mode = self.ui_mode;
            self.show_confirm_dialog(ConfirmDialogState::quit_during_upload(return_mode));
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_loading() {
        let state = AppState::new();
        assert_eq!(state.ui_mode, UiMode::Loading);
        assert_eq!(state.phase, AppPhase::Initializing);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_upload_ids_are_unique() {
        let mut state = AppState::new();
        let a = state.next_upload_id();
        let b = state.next_upload_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_uploads_newest_first_and_capped() {
        let mut state = AppState::new();
        let names: Vec<String> = (0..MAX_RECENT_UPLOADS + 5)
            .map(|i| format!("doc-{}.txt", i))
            .collect();
        state.record_uploads(&names, UploadMode::File);

        assert_eq!(state.recent_uploads.len(), MAX_RECENT_UPLOADS);
        assert_eq!(
            state.recent_uploads[0].name,
            format!("doc-{}.txt", MAX_RECENT_UPLOADS + 4)
        );
    }

    #[test]
    fn test_request_quit_without_upload_quits() {
        let mut state = AppState::new();
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_request_quit_during_upload_asks() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::UploadModal;
        state.upload_modal.begin_upload(1);

        state.request_quit();
        assert!(!state.should_quit());
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

        state.dismiss_confirm_dialog();
        assert_eq!(state.ui_mode, UiMode::UploadModal);
        assert!(state.confirm_dialog_state.is_none());
    }

    #[test]
    fn test_settings_view_navigation_wraps() {
        let mut view = SettingsViewState::new();
        view.select_previous(3);
        assert_eq!(view.selected_index, 2);
        view.select_next(3);
        assert_eq!(view.selected_index, 0);
        view.select_next(0);
        assert_eq!(view.selected_index, 0);
    }
}
