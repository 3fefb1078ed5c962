//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! chatdesk-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;
use crate::state::UiMode;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    /// Highlighted option
    pub selected: usize,
    /// Mode to return to when the dialog is cancelled
    pub return_mode: UiMode,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
        return_mode: UiMode,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
            return_mode,
        }
    }

    /// Leaving settings with unsaved edits
    pub fn unsaved_settings() -> Self {
        Self::new(
            "Unsaved Changes",
            "You have unsaved changes. What do you want to do?",
            vec![
                ("Save & Close", Message::SettingsSaveAndClose),
                ("Discard Changes", Message::ForceHideSettings),
                ("Cancel", Message::ConfirmDialogCancel),
            ],
            UiMode::Settings,
        )
    }

    /// Quitting while an upload is in flight
    pub fn quit_during_upload(return_mode: UiMode) -> Self {
        Self::new(
            "Quit chatdesk?",
            "An upload is still in progress and cannot be cancelled.",
            vec![
                ("Quit", Message::ConfirmQuit),
                ("Cancel", Message::ConfirmDialogCancel),
            ],
            return_mode,
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = if self.selected == 0 {
                self.options.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Message of the option at `index`
    pub fn option_message(&self, index: usize) -> Option<Message> {
        self.options.get(index).map(|(_, msg)| msg.clone())
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.option_message(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_settings_options() {
        let dialog = ConfirmDialogState::unsaved_settings();
        let labels: Vec<&str> = dialog.options.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Save & Close", "Discard Changes", "Cancel"]);
        assert_eq!(dialog.return_mode, UiMode::Settings);
        assert!(matches!(
            dialog.selected_message(),
            Some(Message::SettingsSaveAndClose)
        ));
    }

    #[test]
    fn test_selection_wraps() {
        let mut dialog = ConfirmDialogState::quit_during_upload(UiMode::UploadModal);
        dialog.select_previous();
        assert_eq!(dialog.selected, 1);
        dialog.select_next();
        assert_eq!(dialog.selected, 0);
        assert!(matches!(dialog.option_message(1), Some(Message::ConfirmDialogCancel)));
        assert!(dialog.option_message(9).is_none());
    }
}
