//! Upload modal handlers
//!
//! The modal owns the selection, the text form and the simulated progress.
//! Requests themselves run in a background task started through
//! [`UpdateAction::StartUpload`].

use std::path::PathBuf;
use std::time::Instant;

use chatdesk_core::prelude::*;
use chatdesk_core::{parse_dropped_paths, Notice, UploadMode};

use crate::state::{AppState, UiMode};
use crate::upload_workflow::UploadId;

use super::{UpdateAction, UpdateResult, UploadJob};

/// Handle open upload modal message
pub fn handle_open(state: &mut AppState) -> UpdateResult {
    if state.ui_mode != UiMode::KnowledgeBase {
        return UpdateResult::none();
    }
    state.upload_modal.open();
    state.ui_mode = UiMode::UploadModal;
    UpdateResult::none()
}

/// Handle close upload modal message
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    if state.upload_modal.close() {
        state.ui_mode = UiMode::KnowledgeBase;
    } else {
        state.set_notice(Notice::warning(
            "Upload in progress; the dialog closes when it finishes",
        ));
    }
    UpdateResult::none()
}

pub fn handle_toggle_mode(state: &mut AppState) -> UpdateResult {
    state.upload_modal.toggle_mode();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Input editing
// ─────────────────────────────────────────────────────────

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    let modal = &mut state.upload_modal;
    if !modal.accepts_input() {
        return UpdateResult::none();
    }
    match modal.mode {
        UploadMode::File => modal.path_input.push(c),
        UploadMode::Text => modal.text_form.insert_char(c),
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    let modal = &mut state.upload_modal;
    if !modal.accepts_input() {
        return UpdateResult::none();
    }
    match modal.mode {
        UploadMode::File => {
            modal.path_input.pop();
        }
        UploadMode::Text => modal.text_form.backspace(),
    }
    UpdateResult::none()
}

pub fn handle_input_clear(state: &mut AppState) -> UpdateResult {
    let modal = &mut state.upload_modal;
    if !modal.accepts_input() {
        return UpdateResult::none();
    }
    match modal.mode {
        UploadMode::File => modal.path_input.clear(),
        UploadMode::Text => modal.text_form.clear_field(),
    }
    UpdateResult::none()
}

pub fn handle_input_newline(state: &mut AppState) -> UpdateResult {
    let modal = &mut state.upload_modal;
    if modal.accepts_input() && modal.mode == UploadMode::Text {
        modal.text_form.insert_char('\n');
    }
    UpdateResult::none()
}

pub fn handle_switch_field(state: &mut AppState) -> UpdateResult {
    let modal = &mut state.upload_modal;
    if modal.accepts_input() && modal.mode == UploadMode::Text {
        modal.text_form.switch_focus();
    }
    UpdateResult::none()
}

/// Pasted text while the modal is open
pub fn handle_paste(state: &mut AppState, text: &str) -> UpdateResult {
    if !state.upload_modal.accepts_input() {
        return UpdateResult::none();
    }
    match state.upload_modal.mode {
        UploadMode::File => {
            let paths = parse_dropped_paths(text);
            if paths.is_empty() {
                return UpdateResult::none();
            }
            handle_files_dropped(state, paths)
        }
        UploadMode::Text => {
            state.upload_modal.text_form.insert_str(text);
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────
// File selection
// ─────────────────────────────────────────────────────────

/// Queue whatever paths were typed into the path input
pub fn handle_add_paths(state: &mut AppState) -> UpdateResult {
    if !state.upload_modal.accepts_input() {
        return UpdateResult::none();
    }
    let paths = parse_dropped_paths(&state.upload_modal.path_input);
    state.upload_modal.path_input.clear();
    if paths.is_empty() {
        return UpdateResult::none();
    }
    handle_files_dropped(state, paths)
}

/// One batch of paths from a drop, paste or the path input
pub fn handle_files_dropped(state: &mut AppState, paths: Vec<PathBuf>) -> UpdateResult {
    if !state.upload_modal.accepts_input() {
        debug!("Ignoring {} dropped path(s) while uploading", paths.len());
        return UpdateResult::none();
    }
    state.upload_modal.add_paths(&paths, &state.validator);

    let rejected = state.upload_modal.queue.errors().len();
    if rejected > 0 {
        debug!("{} of {} dropped file(s) rejected", rejected, paths.len());
    }
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.upload_modal.select_next_file();
    UpdateResult::none()
}

pub fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    state.upload_modal.select_previous_file();
    UpdateResult::none()
}

pub fn handle_remove_selected(state: &mut AppState) -> UpdateResult {
    if state.upload_modal.accepts_input() {
        state.upload_modal.remove_selected_file();
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Submission lifecycle
// ─────────────────────────────────────────────────────────

/// Submit the queue (file mode) or the text form (text mode)
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if !state.upload_modal.accepts_input() {
        return UpdateResult::none();
    }

    let job = match state.upload_modal.mode {
        UploadMode::File => {
            let mut files = Vec::new();
            if state.upload_modal.queue.submit(|file| files.push(file)) == 0 {
                return UpdateResult::none();
            }
            state.upload_modal.selected_file = 0;
            UploadJob::Files(files)
        }
        UploadMode::Text => match state.upload_modal.text_form.submit() {
            Some(submission) => UploadJob::Text {
                content: submission.content,
                filename: submission.filename,
            },
            None => return UpdateResult::none(),
        },
    };

    let upload_id = state.next_upload_id();
    info!(
        "Starting upload #{} ({} document(s))",
        upload_id,
        job.names().len()
    );
    state.upload_modal.begin_upload(upload_id);

    UpdateResult::action(UpdateAction::StartUpload {
        upload_id,
        job,
        tick: state.progress_tick(),
    })
}

pub fn handle_progress_tick(
    state: &mut AppState,
    upload_id: UploadId,
    increment: f64,
) -> UpdateResult {
    state.upload_modal.apply_tick(upload_id, increment);
    UpdateResult::none()
}

pub fn handle_succeeded(
    state: &mut AppState,
    upload_id: UploadId,
    uploaded: Vec<String>,
) -> UpdateResult {
    let mode = state.upload_modal.mode;
    if !state.upload_modal.finish_success(upload_id, Instant::now()) {
        warn!("Result for stale upload #{} ignored", upload_id);
    }

    info!("Upload #{} succeeded: {}", upload_id, uploaded.join(", "));
    let text = match uploaded.as_slice() {
        [single] => format!("Uploaded {}", single),
        many => format!("Uploaded {} documents", many.len()),
    };
    state.record_uploads(&uploaded, mode);
    state.set_notice(Notice::success(text));
    UpdateResult::none()
}

pub fn handle_failed(
    state: &mut AppState,
    upload_id: UploadId,
    uploaded: Vec<String>,
    error: String,
) -> UpdateResult {
    let mode = state.upload_modal.mode;
    if !state.upload_modal.finish_failure(upload_id) {
        warn!("Failure for stale upload #{} ignored", upload_id);
    }

    error!("Upload #{} failed: {}", upload_id, error);
    state.record_uploads(&uploaded, mode);
    state.set_notice(Notice::error(format!("Upload failed: {}", error)));
    UpdateResult::none()
}

/// Close the modal once the success view has been shown long enough
pub fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    if !state.upload_modal.poll_auto_close(now) {
        return UpdateResult::none();
    }
    state.upload_modal.close();

    match state.ui_mode {
        UiMode::UploadModal => state.ui_mode = UiMode::KnowledgeBase,
        UiMode::ConfirmDialog => {
            if let Some(dialog) = state.confirm_dialog_state.as_mut() {
                if dialog.return_mode == UiMode::UploadModal {
                    dialog.return_mode = UiMode::KnowledgeBase;
                }
            }
        }
        _ => {}
    }
    UpdateResult::none()
}
