//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `upload`: Upload modal handlers
//! - `settings`: Settings screen handlers

use std::time::Instant;

use chatdesk_core::prelude::*;
use chatdesk_core::{parse_dropped_paths, AppPhase, Company, Notice, UploadMode};

use crate::message::Message;
use crate::state::{AppState, UiMode};

use super::{keys::handle_key, settings, upload, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit | Message::ConfirmQuit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Paste(text) => handle_paste(state, &text),

        Message::Tick => upload::handle_tick(state, Instant::now()),

        // ─────────────────────────────────────────────────────────
        // Company Record
        // ─────────────────────────────────────────────────────────
        Message::RefreshCompany => {
            if state.company.loading {
                return UpdateResult::none();
            }
            state.company.loading = true;
            UpdateResult::action(UpdateAction::FetchCompany)
        }

        Message::CompanyLoaded(company) => handle_company_loaded(state, company),

        Message::CompanyLoadFailed { error } => {
            error!("Failed to load company profile: {}", error);
            state.company.set_load_failed(error.clone());
            state.set_notice(Notice::error(format!(
                "Could not load company profile: {}",
                error
            )));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload Modal
        // ─────────────────────────────────────────────────────────
        Message::OpenUploadModal => upload::handle_open(state),
        Message::CloseUploadModal => upload::handle_close(state),
        Message::ToggleUploadMode => upload::handle_toggle_mode(state),
        Message::UploadInputChar(c) => upload::handle_input_char(state, c),
        Message::UploadInputBackspace => upload::handle_input_backspace(state),
        Message::UploadInputClear => upload::handle_input_clear(state),
        Message::UploadInputNewline => upload::handle_input_newline(state),
        Message::UploadSwitchField => upload::handle_switch_field(state),
        Message::UploadAddPaths => upload::handle_add_paths(state),
        Message::FilesDropped { paths } => upload::handle_files_dropped(state, paths),
        Message::UploadSelectNext => upload::handle_select_next(state),
        Message::UploadSelectPrev => upload::handle_select_prev(state),
        Message::UploadRemoveSelected => upload::handle_remove_selected(state),
        Message::UploadSubmit => upload::handle_submit(state),
        Message::UploadProgressTick {
            upload_id,
            increment,
        } => upload::handle_progress_tick(state, upload_id, increment),
        Message::UploadSucceeded {
            upload_id,
            uploaded,
        } => upload::handle_succeeded(state, upload_id, uploaded),
        Message::UploadFailed {
            upload_id,
            uploaded,
            error,
        } => upload::handle_failed(state, upload_id, uploaded, error),

        // ─────────────────────────────────────────────────────────
        // Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::ShowSettings => settings::handle_show_settings(state),
        Message::HideSettings => settings::handle_hide_settings(state),
        Message::ForceHideSettings => settings::handle_force_hide_settings(state),
        Message::SettingsSaveAndClose => settings::handle_save_and_close(state),
        Message::SettingsNextItem => settings::handle_next_item(state),
        Message::SettingsPrevItem => settings::handle_prev_item(state),
        Message::SettingsToggleEdit => settings::handle_toggle_edit(state),
        Message::SettingsToggleBool => settings::handle_toggle_bool(state),
        Message::SettingsCharInput(c) => settings::handle_char_input(state, c),
        Message::SettingsBackspace => settings::handle_backspace(state),
        Message::SettingsClearBuffer => settings::handle_clear_buffer(state),
        Message::SettingsCommitEdit => settings::handle_commit_edit(state),
        Message::SettingsCancelEdit => settings::handle_cancel_edit(state),
        Message::SettingsSave => settings::handle_save(state),
        Message::SettingsDiscard => settings::handle_discard(state),
        Message::SettingsSaved { response } => settings::handle_saved(state, response),
        Message::SettingsSaveFailed { error } => settings::handle_save_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Confirm Dialog
        // ─────────────────────────────────────────────────────────
        Message::ConfirmDialogNext => {
            if let Some(dialog) = state.confirm_dialog_state.as_mut() {
                dialog.select_next();
            }
            UpdateResult::none()
        }

        Message::ConfirmDialogPrev => {
            if let Some(dialog) = state.confirm_dialog_state.as_mut() {
                dialog.select_previous();
            }
            UpdateResult::none()
        }

        Message::ConfirmDialogConfirm => {
            let selected = state
                .confirm_dialog_state
                .as_ref()
                .map(|dialog| dialog.selected);
            match selected {
                Some(index) => pick_dialog_option(state, index),
                None => UpdateResult::none(),
            }
        }

        Message::ConfirmDialogSelect(index) => pick_dialog_option(state, index),

        Message::ConfirmDialogCancel => {
            state.dismiss_confirm_dialog();
            UpdateResult::none()
        }
    }
}

fn handle_company_loaded(state: &mut AppState, company: Company) -> UpdateResult {
    info!("Loaded company profile for {}", company.name);
    state.settings_tracker.replace_from_remote(&company);
    state.company.set_loaded(company);

    if state.phase == AppPhase::Initializing {
        state.phase = AppPhase::Running;
    }
    if state.ui_mode == UiMode::Loading {
        state.ui_mode = UiMode::KnowledgeBase;
    }
    UpdateResult::none()
}

/// Close the dialog, then run the chosen option's message
fn pick_dialog_option(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(msg) = state
        .confirm_dialog_state
        .as_ref()
        .and_then(|dialog| dialog.option_message(index))
    else {
        return UpdateResult::none();
    };

    state.dismiss_confirm_dialog();
    match msg {
        Message::ConfirmDialogCancel => UpdateResult::none(),
        other => UpdateResult::message(other),
    }
}

/// Pasted text (also how terminals deliver dropped files)
fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    match state.ui_mode {
        UiMode::UploadModal => upload::handle_paste(state, text),
        UiMode::Settings => settings::handle_paste(state, text),
        UiMode::KnowledgeBase => {
            let paths = parse_dropped_paths(text);
            if paths.is_empty() {
                return UpdateResult::none();
            }
            upload::handle_open(state);
            state.upload_modal.set_mode(UploadMode::File);
            upload::handle_files_dropped(state, paths)
        }
        UiMode::Loading | UiMode::ConfirmDialog => UpdateResult::none(),
    }
}
