//! Bottom line: latest notice on the left, key hints for the screen

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use chatdesk_app::state::{AppState, UiMode};
use chatdesk_app::UploadStatus;
use chatdesk_core::UploadMode;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.ui_mode {
            UiMode::Loading => vec![("r", "retry"), ("q", "quit")],
            UiMode::KnowledgeBase => vec![
                ("a", "add documents"),
                ("s", "settings"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            UiMode::UploadModal => {
                let modal = &self.state.upload_modal;
                if modal.status() != UploadStatus::Idle || modal.is_loading() {
                    vec![("Esc", "close")]
                } else {
                    match modal.mode {
                        UploadMode::File => vec![
                            ("Enter", "add path / upload"),
                            ("^S", "upload"),
                            ("Del", "remove"),
                            ("^T", "text mode"),
                            ("Esc", "close"),
                        ],
                        UploadMode::Text => vec![
                            ("Tab", "switch field"),
                            ("^S", "upload"),
                            ("^U", "clear"),
                            ("^T", "file mode"),
                            ("Esc", "close"),
                        ],
                    }
                }
            }
            UiMode::Settings if self.state.settings_view_state.editing => {
                vec![("Enter", "apply"), ("Esc", "cancel")]
            }
            UiMode::Settings => vec![
                ("Enter", "edit"),
                ("^S", "save"),
                ("r", "discard"),
                ("Esc", "back"),
            ],
            UiMode::ConfirmDialog => vec![("←/→", "choose"), ("Enter", "confirm"), ("Esc", "cancel")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .hints()
            .into_iter()
            .flat_map(|(key, label)| styles::key_hint(key, label))
            .collect();
        let hints = Line::from(spans);
        let hints_width = (hints.width() as u16).min(area.width.saturating_mul(2) / 3);

        let [notice_area, hints_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(hints_width)]).areas(area);

        if let Some(notice) = &self.state.notice {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice.text),
                styles::notice(notice.level),
            )))
            .render(notice_area, buf);
        }

        Paragraph::new(hints).render(hints_area, buf);
    }
}
