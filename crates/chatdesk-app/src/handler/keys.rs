//! Key event handlers for different UI modes

use chatdesk_core::UploadMode;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};
use crate::text_upload::TextField;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Loading => handle_key_loading(key),
        UiMode::KnowledgeBase => handle_key_knowledge_base(key),
        UiMode::UploadModal => handle_key_upload_modal(state, key),
        UiMode::Settings => handle_key_settings(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

/// Handle key events in loading mode
fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        // Retry after a failed fetch
        InputKey::Char('r') => Some(Message::RefreshCompany),
        _ => None,
    }
}

fn handle_key_knowledge_base(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char('a' | 'n') | InputKey::Enter => Some(Message::OpenUploadModal),
        InputKey::Char('s') | InputKey::Tab => Some(Message::ShowSettings),
        InputKey::Char('r') => Some(Message::RefreshCompany),

        _ => None,
    }
}

fn handle_key_upload_modal(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that work in every modal status
    match key {
        InputKey::Esc => return Some(Message::CloseUploadModal),
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('t') => return Some(Message::ToggleUploadMode),
        _ => {}
    }

    let modal = &state.upload_modal;
    if !modal.accepts_input() {
        return None;
    }

    match modal.mode {
        UploadMode::File => match key {
            InputKey::Enter if modal.path_input.trim().is_empty() => Some(Message::UploadSubmit),
            InputKey::Enter => Some(Message::UploadAddPaths),
            InputKey::CharCtrl('s') => Some(Message::UploadSubmit),
            InputKey::CharCtrl('u') => Some(Message::UploadInputClear),
            InputKey::Up => Some(Message::UploadSelectPrev),
            InputKey::Down => Some(Message::UploadSelectNext),
            InputKey::Delete => Some(Message::UploadRemoveSelected),
            InputKey::Backspace => Some(Message::UploadInputBackspace),
            InputKey::Char(c) => Some(Message::UploadInputChar(c)),
            _ => None,
        },
        UploadMode::Text => match key {
            InputKey::Tab | InputKey::BackTab => Some(Message::UploadSwitchField),
            InputKey::Enter if modal.text_form.focus == TextField::Content => {
                Some(Message::UploadInputNewline)
            }
            InputKey::Enter => Some(Message::UploadSwitchField),
            InputKey::CharCtrl('s') => Some(Message::UploadSubmit),
            InputKey::CharCtrl('u') => Some(Message::UploadInputClear),
            InputKey::Backspace => Some(Message::UploadInputBackspace),
            InputKey::Char(c) => Some(Message::UploadInputChar(c)),
            _ => None,
        },
    }
}

fn handle_key_settings(state: &AppState, key: InputKey) -> Option<Message> {
    // If editing, handle text input
    if state.settings_view_state.editing {
        return handle_key_settings_edit(key);
    }

    match key {
        // Close settings
        InputKey::Esc | InputKey::Char('q') | InputKey::Tab => Some(Message::HideSettings),

        // Item navigation
        InputKey::Char('j') | InputKey::Down => Some(Message::SettingsNextItem),
        InputKey::Char('k') | InputKey::Up => Some(Message::SettingsPrevItem),

        // Toggle/edit
        InputKey::Enter | InputKey::Char(' ') => Some(Message::SettingsToggleEdit),

        InputKey::CharCtrl('s') => Some(Message::SettingsSave),
        InputKey::Char('r') => Some(Message::SettingsDiscard),

        // Force quit with Ctrl+C
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events while editing a text value
fn handle_key_settings_edit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::SettingsCancelEdit),
        InputKey::Enter => Some(Message::SettingsCommitEdit),
        InputKey::Char(c) => Some(Message::SettingsCharInput(c)),
        InputKey::Backspace => Some(Message::SettingsBackspace),
        InputKey::Delete => Some(Message::SettingsClearBuffer),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up | InputKey::BackTab => Some(Message::ConfirmDialogPrev),
        InputKey::Right | InputKey::Down | InputKey::Tab => Some(Message::ConfirmDialogNext),
        InputKey::Enter => Some(Message::ConfirmDialogConfirm),
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::ConfirmDialogSelect(index))
        }
        InputKey::Esc => Some(Message::ConfirmDialogCancel),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
