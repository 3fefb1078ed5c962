//! Flow tests for the update function

use std::time::{Duration, Instant};

use chatdesk_core::{BatchUpdateSettingsResponse, Company, NoticeLevel, UploadMode};
use tempfile::tempdir;

use super::*;
use crate::input_key::InputKey;
use crate::settings_tracker::SettingsField;
use crate::state::{AppState, UiMode};
use crate::upload_workflow::UploadStatus;

fn company(slug: Option<&str>) -> Company {
    Company {
        id: Some(serde_json::json!("c-1")),
        name: "Acme".into(),
        email: "ops@acme.test".into(),
        slug: slug.map(String::from),
        ..Default::default()
    }
}

/// Run a message and all its follow-ups, collecting the actions
fn process(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn loaded_state(slug: Option<&str>) -> AppState {
    let mut state = AppState::new();
    process(&mut state, Message::CompanyLoaded(company(slug)));
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process(state, Message::UploadInputChar(c));
    }
}

fn start_upload(actions: Vec<UpdateAction>) -> (crate::upload_workflow::UploadId, UploadJob) {
    match actions.as_slice() {
        [UpdateAction::StartUpload { upload_id, job, .. }] => (*upload_id, job.clone()),
        other => panic!("expected one StartUpload, got {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Startup
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_dispatches_single_fetch() {
    let mut state = AppState::new();
    let actions = process(&mut state, Message::RefreshCompany);
    assert!(matches!(actions.as_slice(), [UpdateAction::FetchCompany]));

    // Already loading: no second request
    assert!(process(&mut state, Message::RefreshCompany).is_empty());
}

#[test]
fn test_company_loaded_enters_knowledge_base() {
    let state = loaded_state(Some("acme"));
    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
    assert_eq!(state.company.slug(), Some("acme"));
    assert_eq!(state.settings_tracker.working().chatbot_title, "Acme");
}

#[test]
fn test_company_load_failure_stays_on_loading_screen() {
    let mut state = AppState::new();
    process(&mut state, Message::RefreshCompany);
    process(
        &mut state,
        Message::CompanyLoadFailed {
            error: "Unauthorized".into(),
        },
    );

    assert_eq!(state.ui_mode, UiMode::Loading);
    assert!(!state.company.loading);
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);

    // 'r' retries
    let actions = process(&mut state, Message::Key(InputKey::Char('r')));
    assert!(matches!(actions.as_slice(), [UpdateAction::FetchCompany]));
}

#[test]
fn test_loading_screen_quits_on_q() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Text upload
// ─────────────────────────────────────────────────────────

#[test]
fn test_text_upload_full_cycle() {
    let mut state = loaded_state(Some("acme"));

    process(&mut state, Message::Key(InputKey::Char('a')));
    assert_eq!(state.ui_mode, UiMode::UploadModal);

    process(&mut state, Message::Key(InputKey::CharCtrl('t')));
    assert_eq!(state.upload_modal.mode, UploadMode::Text);

    type_text(&mut state, "  faq ");
    process(&mut state, Message::Key(InputKey::Tab));
    type_text(&mut state, "We ship worldwide.");

    let actions = process(&mut state, Message::Key(InputKey::CharCtrl('s')));
    let (upload_id, job) = start_upload(actions);
    assert_eq!(
        job,
        UploadJob::Text {
            content: "We ship worldwide.".into(),
            filename: "faq.txt".into(),
        }
    );

    // In flight: inputs and close refused
    assert!(state.upload_in_flight());
    process(&mut state, Message::CloseUploadModal);
    assert_eq!(state.ui_mode, UiMode::UploadModal);
    assert!(process(&mut state, Message::UploadSubmit).is_empty());

    process(
        &mut state,
        Message::UploadProgressTick {
            upload_id,
            increment: 25.0,
        },
    );
    assert_eq!(state.upload_modal.status(), UploadStatus::Uploading);
    assert_eq!(state.upload_modal.progress().value(), 25.0);

    process(
        &mut state,
        Message::UploadSucceeded {
            upload_id,
            uploaded: vec!["faq.txt".into()],
        },
    );
    assert_eq!(state.upload_modal.status(), UploadStatus::Success);
    assert_eq!(state.upload_modal.progress().value(), 100.0);
    assert_eq!(state.recent_uploads[0].name, "faq.txt");
    assert_eq!(state.recent_uploads[0].mode, UploadMode::Text);

    // Dwell not yet elapsed
    upload::handle_tick(&mut state, Instant::now());
    assert_eq!(state.ui_mode, UiMode::UploadModal);

    upload::handle_tick(&mut state, Instant::now() + Duration::from_millis(1300));
    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
    assert_eq!(state.upload_modal.progress().value(), 0.0);
    assert_eq!(state.upload_modal.status(), UploadStatus::Idle);

    // Mode persists across open/close
    process(&mut state, Message::OpenUploadModal);
    assert_eq!(state.upload_modal.mode, UploadMode::Text);
}

#[test]
fn test_text_upload_validation_blocks_submit() {
    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    process(&mut state, Message::ToggleUploadMode);

    process(&mut state, Message::UploadSwitchField);
    type_text(&mut state, "short");

    assert!(process(&mut state, Message::UploadSubmit).is_empty());
    let form = &state.upload_modal.text_form;
    assert_eq!(form.filename_error.as_deref(), Some("Filename is required"));
    assert_eq!(
        form.content_error.as_deref(),
        Some("Content must be at least 10 characters long")
    );
    assert!(!state.upload_in_flight());
}

#[test]
fn test_enter_in_content_inserts_newline() {
    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    process(&mut state, Message::ToggleUploadMode);

    // Enter on the filename field moves focus to content
    process(&mut state, Message::Key(InputKey::Enter));
    type_text(&mut state, "line one");
    process(&mut state, Message::Key(InputKey::Enter));
    type_text(&mut state, "line two");

    assert_eq!(state.upload_modal.text_form.content, "line one\nline two");
}

// ─────────────────────────────────────────────────────────
// File upload
// ─────────────────────────────────────────────────────────

#[test]
fn test_dropped_file_opens_modal_and_uploads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("guide.txt");
    std::fs::write(&path, "hello world").unwrap();

    let mut state = loaded_state(Some("acme"));
    state.upload_modal.mode = UploadMode::Text;

    process(&mut state, Message::Paste(path.display().to_string()));
    assert_eq!(state.ui_mode, UiMode::UploadModal);
    assert_eq!(state.upload_modal.mode, UploadMode::File);
    assert_eq!(state.upload_modal.queue.len(), 1);

    let actions = process(&mut state, Message::Key(InputKey::Enter));
    let (upload_id, job) = start_upload(actions);
    match job {
        UploadJob::Files(files) => {
            assert_eq!(files.len(), 1);
            assert_eq!(files[0].name, "guide.txt");
        }
        other => panic!("unexpected job {:?}", other),
    }
    assert!(state.upload_modal.queue.is_empty());

    process(
        &mut state,
        Message::UploadProgressTick {
            upload_id,
            increment: 12.0,
        },
    );
    process(
        &mut state,
        Message::UploadFailed {
            upload_id,
            uploaded: vec![],
            error: "Unsupported document".into(),
        },
    );

    assert_eq!(state.upload_modal.status(), UploadStatus::Idle);
    assert_eq!(state.upload_modal.progress().value(), 0.0);
    assert!(state.upload_modal.accepts_input());
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("Unsupported document"));

    // Failure leaves the modal open and closable
    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
}

#[test]
fn test_rejected_drop_lists_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, [0u8; 4]).unwrap();

    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    process(
        &mut state,
        Message::FilesDropped {
            paths: vec![path, dir.path().join("missing.txt")],
        },
    );

    assert!(state.upload_modal.queue.is_empty());
    assert_eq!(state.upload_modal.queue.errors().len(), 2);
    assert!(process(&mut state, Message::UploadSubmit).is_empty());
}

#[test]
fn test_typed_path_is_queued_on_enter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.md");
    std::fs::write(&path, "# Notes").unwrap();

    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    type_text(&mut state, &path.display().to_string());

    let actions = process(&mut state, Message::Key(InputKey::Enter));
    assert!(actions.is_empty());
    assert!(state.upload_modal.path_input.is_empty());
    assert_eq!(state.upload_modal.queue.files()[0].name, "notes.md");
}

#[test]
fn test_stale_results_are_ignored() {
    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    process(&mut state, Message::ToggleUploadMode);
    state.upload_modal.text_form.filename = "a".into();
    state.upload_modal.text_form.content = "enough content here".into();
    let (upload_id, _) = start_upload(process(&mut state, Message::UploadSubmit));

    process(
        &mut state,
        Message::UploadProgressTick {
            upload_id: upload_id + 1,
            increment: 20.0,
        },
    );
    assert_eq!(state.upload_modal.progress().value(), 0.0);
    assert!(state.upload_in_flight());
}

#[test]
fn test_quit_during_upload_asks_first() {
    let mut state = loaded_state(Some("acme"));
    process(&mut state, Message::OpenUploadModal);
    process(&mut state, Message::ToggleUploadMode);
    state.upload_modal.text_form.filename = "a".into();
    state.upload_modal.text_form.content = "enough content here".into();
    start_upload(process(&mut state, Message::UploadSubmit));

    process(&mut state, Message::RequestQuit);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(!state.should_quit());

    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::UploadModal);

    process(&mut state, Message::RequestQuit);
    process(&mut state, Message::Key(InputKey::Char('1')));
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────

fn open_settings_at(state: &mut AppState, index: usize) {
    process(state, Message::Key(InputKey::Char('s')));
    assert_eq!(state.ui_mode, UiMode::Settings);
    for _ in 0..index {
        process(state, Message::Key(InputKey::Down));
    }
}

fn edit_selected(state: &mut AppState, value: &str) {
    process(state, Message::Key(InputKey::Enter));
    assert!(state.settings_view_state.editing);
    process(state, Message::Key(InputKey::Delete));
    for c in value.chars() {
        process(state, Message::Key(InputKey::Char(c)));
    }
    process(state, Message::Key(InputKey::Enter));
}

#[test]
fn test_settings_save_sends_only_changed_fields() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 3);
    edit_selected(&mut state, "Acme Help");

    let changes = state.settings_tracker.get_changes();
    assert!(changes.contains(SettingsField::ChatbotTitle));
    assert_eq!(changes.changed_fields.len(), 1);

    let actions = process(&mut state, Message::Key(InputKey::CharCtrl('s')));
    let request = match actions.as_slice() {
        [UpdateAction::SaveSettings { request }] => request.clone(),
        other => panic!("unexpected actions {:?}", other),
    };
    assert_eq!(request.chatbot_title.as_deref(), Some("Acme Help"));
    assert!(request.slug.is_none());
    assert!(request.is_published.is_none());
    assert!(state.company.saving);

    // A second save while one is in flight is ignored
    assert!(process(&mut state, Message::SettingsSave).is_empty());

    let mut saved = company(Some("acme"));
    saved.chatbot_title = Some("Acme Help".into());
    process(
        &mut state,
        Message::SettingsSaved {
            response: BatchUpdateSettingsResponse {
                message: String::new(),
                company: saved,
            },
        },
    );

    assert!(!state.settings_tracker.has_changes());
    assert!(!state.company.saving);
    assert_eq!(state.company.public_url.as_deref(), Some("/acme"));
    assert_eq!(state.notice.as_ref().unwrap().text, "Settings updated");
}

#[test]
fn test_invalid_slug_is_not_saved() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 2);
    edit_selected(&mut state, "Acme Co");

    assert!(state.settings_view_state.error.is_some());
    assert!(process(&mut state, Message::SettingsSave).is_empty());
    assert!(!state.company.saving);
}

#[test]
fn test_save_failure_keeps_edits() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 4);
    edit_selected(&mut state, "Ask us anything");
    process(&mut state, Message::SettingsSave);

    process(
        &mut state,
        Message::SettingsSaveFailed {
            error: "Failed to update settings".into(),
        },
    );

    assert!(state.settings_tracker.has_changes());
    assert!(!state.company.saving);
    assert_eq!(state.company.error.as_deref(), Some("Failed to update settings"));
}

#[test]
fn test_publish_toggle_disabled_without_slug() {
    let mut state = loaded_state(None);
    open_settings_at(&mut state, 5);

    process(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(!state.settings_tracker.working().is_published);
    assert!(state.settings_view_state.error.is_some());
}

#[test]
fn test_publish_toggle_with_slug() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 5);

    process(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(state.settings_tracker.working().is_published);
    assert!(state
        .settings_tracker
        .get_changes()
        .contains(SettingsField::IsPublished));
}

#[test]
fn test_readonly_fields_cannot_be_edited() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 0);

    process(&mut state, Message::Key(InputKey::Enter));
    assert!(!state.settings_view_state.editing);
    assert!(state.settings_view_state.error.is_some());
}

#[test]
fn test_leaving_with_changes_asks_then_discards() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 3);
    edit_selected(&mut state, "Changed");

    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    // Second option: Discard Changes
    process(&mut state, Message::Key(InputKey::Down));
    process(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
    assert!(!state.settings_tracker.has_changes());
    assert!(state.confirm_dialog_state.is_none());
}

#[test]
fn test_save_and_close_from_dialog() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 3);
    edit_selected(&mut state, "Changed");

    process(&mut state, Message::HideSettings);
    let actions = process(&mut state, Message::ConfirmDialogConfirm);
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SaveSettings { .. }]
    ));
    assert_eq!(state.ui_mode, UiMode::Settings);

    let mut saved = company(Some("acme"));
    saved.chatbot_title = Some("Changed".into());
    process(
        &mut state,
        Message::SettingsSaved {
            response: BatchUpdateSettingsResponse {
                message: "Saved".into(),
                company: saved,
            },
        },
    );
    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
}

#[test]
fn test_discard_restores_baseline() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 2);
    edit_selected(&mut state, "other");
    assert!(state.settings_tracker.has_changes());

    process(&mut state, Message::Key(InputKey::Char('r')));
    assert!(!state.settings_tracker.has_changes());
    assert_eq!(state.settings_tracker.working().slug, "acme");
}

#[test]
fn test_remote_reload_replaces_unsaved_edits() {
    let mut state = loaded_state(Some("acme"));
    open_settings_at(&mut state, 2);
    edit_selected(&mut state, "other");

    process(&mut state, Message::CompanyLoaded(company(Some("acme-new"))));
    assert!(!state.settings_tracker.has_changes());
    assert_eq!(state.settings_tracker.working().slug, "acme-new");
    assert_eq!(state.ui_mode, UiMode::Settings);
}

#[test]
fn test_settings_need_loaded_company() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::KnowledgeBase;
    process(&mut state, Message::ShowSettings);
    assert_eq!(state.ui_mode, UiMode::KnowledgeBase);
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Warning);
}
