//! Settings screen handlers
//!
//! Handles navigation, editing, and the batch save of the company settings.
//! Edits go to the working copy of [`SettingsChangeTracker`]; the baseline
//! only moves after the backend confirmed a save.
//!
//! [`SettingsChangeTracker`]: crate::settings_tracker::SettingsChangeTracker

use chatdesk_core::prelude::*;
use chatdesk_core::{BatchUpdateSettingsResponse, Notice};

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::Message;
use crate::publishing::{is_valid_slug, SLUG_HINT};
use crate::remote_settings::build_update_request;
use crate::settings_items::{get_selected_item, settings_items, SettingValue};
use crate::settings_tracker::{FieldValue, SettingsField};
use crate::state::{AppState, UiMode};

use super::{update, UpdateAction, UpdateResult};

/// Handle show settings message
pub fn handle_show_settings(state: &mut AppState) -> UpdateResult {
    if state.company.company.is_none() {
        state.set_notice(Notice::warning("Company profile is not loaded yet"));
        return UpdateResult::none();
    }
    if state.ui_mode == UiMode::KnowledgeBase {
        state.show_settings();
    }
    UpdateResult::none()
}

/// Handle hide settings message
pub fn handle_hide_settings(state: &mut AppState) -> UpdateResult {
    if state.settings_tracker.has_changes() && state.settings.behavior.confirm_discard {
        state.show_confirm_dialog(ConfirmDialogState::unsaved_settings());
        return UpdateResult::none();
    }
    handle_force_hide_settings(state)
}

/// Leave settings, dropping unsaved edits
pub fn handle_force_hide_settings(state: &mut AppState) -> UpdateResult {
    if state.settings_tracker.has_changes() {
        debug!("Leaving settings, discarding unsaved edits");
        state.settings_tracker.reset_changes();
    }
    state.hide_settings();
    UpdateResult::none()
}

pub fn handle_save_and_close(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.close_after_save = true;
    handle_save(state)
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

pub fn handle_next_item(state: &mut AppState) -> UpdateResult {
    let count = settings_items(&state.settings_tracker).len();
    state.settings_view_state.select_next(count);
    UpdateResult::none()
}

pub fn handle_prev_item(state: &mut AppState) -> UpdateResult {
    let count = settings_items(&state.settings_tracker).len();
    state.settings_view_state.select_previous(count);
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Editing
// ─────────────────────────────────────────────────────────

/// Start editing the selected item, or toggle it if boolean
pub fn handle_toggle_edit(state: &mut AppState) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.stop_editing();
        return UpdateResult::none();
    }

    let Some(item) = get_selected_item(
        &state.settings_tracker,
        state.settings_view_state.selected_index,
    ) else {
        return UpdateResult::none();
    };

    if item.readonly {
        state.settings_view_state.error = Some(format!("{} is managed by your account", item.label));
        return UpdateResult::none();
    }
    if item.disabled {
        state.settings_view_state.error = Some("Set a company slug before publishing".to_string());
        return UpdateResult::none();
    }

    match &item.value {
        SettingValue::Bool(_) => update(state, Message::SettingsToggleBool),
        SettingValue::Text(s) => {
            state.settings_view_state.start_editing(s);
            UpdateResult::none()
        }
    }
}

pub fn handle_toggle_bool(state: &mut AppState) -> UpdateResult {
    let Some(item) = get_selected_item(
        &state.settings_tracker,
        state.settings_view_state.selected_index,
    ) else {
        return UpdateResult::none();
    };

    if let SettingValue::Bool(value) = item.value {
        if item.is_interactive() {
            apply_field(state, item.field, FieldValue::Flag(!value));
        }
    }
    UpdateResult::none()
}

pub fn handle_char_input(state: &mut AppState, ch: char) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.push(ch);
    }
    UpdateResult::none()
}

/// Pasted text goes into the edit buffer as a single line
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if state.settings_view_state.editing {
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        state.settings_view_state.edit_buffer.push_str(&line);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.pop();
    }
    UpdateResult::none()
}

pub fn handle_clear_buffer(state: &mut AppState) -> UpdateResult {
    if state.settings_view_state.editing {
        state.settings_view_state.edit_buffer.clear();
    }
    UpdateResult::none()
}

/// Write the edit buffer into the working copy
pub fn handle_commit_edit(state: &mut AppState) -> UpdateResult {
    if !state.settings_view_state.editing {
        return UpdateResult::none();
    }

    let Some(item) = get_selected_item(
        &state.settings_tracker,
        state.settings_view_state.selected_index,
    ) else {
        state.settings_view_state.stop_editing();
        return UpdateResult::none();
    };

    let value = state.settings_view_state.edit_buffer.trim().to_string();
    state.settings_view_state.stop_editing();

    let slug_invalid = item.field == SettingsField::Slug && !is_valid_slug(&value);
    apply_field(state, item.field, FieldValue::Text(value));
    if slug_invalid {
        state.settings_view_state.error = Some(SLUG_HINT.to_string());
    }
    UpdateResult::none()
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    state.settings_view_state.stop_editing();
    UpdateResult::none()
}

fn apply_field(state: &mut AppState, field: SettingsField, value: FieldValue) {
    if let Err(e) = state.settings_tracker.update_field(field, value) {
        warn!("Rejected settings edit: {}", e);
        state.settings_view_state.error = Some(e.user_message());
    }
}

// ─────────────────────────────────────────────────────────
// Persistence
// ─────────────────────────────────────────────────────────

/// Send only the changed fields to the backend
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.company.saving {
        return UpdateResult::none();
    }

    let Some(request) = build_update_request(&state.settings_tracker) else {
        if state.settings_view_state.close_after_save {
            state.hide_settings();
        } else {
            state.set_notice(Notice::info("No changes to save"));
        }
        return UpdateResult::none();
    };

    if let Some(slug) = &request.slug {
        if !is_valid_slug(slug) {
            state.settings_view_state.error = Some(SLUG_HINT.to_string());
            state.settings_view_state.close_after_save = false;
            state.set_notice(Notice::error(format!("Invalid company slug: {}", SLUG_HINT)));
            return UpdateResult::none();
        }
    }

    info!("Saving company settings");
    state.company.saving = true;
    state.company.error = None;
    UpdateResult::action(UpdateAction::SaveSettings { request })
}

/// Drop all unsaved edits
pub fn handle_discard(state: &mut AppState) -> UpdateResult {
    if state.settings_tracker.has_changes() {
        state.settings_tracker.reset_changes();
        state.set_notice(Notice::info("Changes discarded"));
    }
    state.settings_view_state.stop_editing();
    state.settings_view_state.error = None;
    UpdateResult::none()
}

pub fn handle_saved(state: &mut AppState, response: BatchUpdateSettingsResponse) -> UpdateResult {
    state.settings_tracker.mark_as_saved();
    state.settings_tracker.replace_from_remote(&response.company);
    state.company.apply_saved(response.company);
    state.settings_view_state.error = None;

    let text = if response.message.trim().is_empty() {
        "Settings updated".to_string()
    } else {
        response.message
    };
    info!("{}", text);
    state.set_notice(Notice::success(text));

    if state.settings_view_state.close_after_save && state.ui_mode == UiMode::Settings {
        state.hide_settings();
    }
    state.settings_view_state.close_after_save = false;
    UpdateResult::none()
}

pub fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    error!("Settings save failed: {}", error);
    state.company.set_save_failed(error.clone());
    state.settings_view_state.close_after_save = false;
    state.set_notice(Notice::error(error));
    UpdateResult::none()
}
