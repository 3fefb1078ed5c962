//! Confirmation dialog widget (unsaved settings, quit during upload)

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use chatdesk_app::confirm_dialog::ConfirmDialogState;

use super::modal_overlay;
use crate::theme::styles;

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(60, 9, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, message, _, buttons] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::status_yellow())
            .centered()
            .wrap(Wrap { trim: true })
            .render(message, buf);

        let mut spans = Vec::new();
        for (index, (label, _)) in self.state.options.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if index == self.state.selected {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {}. {} ", index + 1, label), style));
        }
        Paragraph::new(Line::from(spans))
            .centered()
            .render(buttons, buf);
    }
}
