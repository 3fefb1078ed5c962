//! Top bar: product name, company and publishing state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use chatdesk_app::publishing;
use chatdesk_app::state::AppState;

use crate::theme::styles;

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(" chatdesk ", styles::accent_bold())];

        match self.state.company.company.as_ref() {
            Some(company) => {
                spans.push(Span::styled("│ ", styles::text_muted()));
                spans.push(Span::styled(company.name.clone(), styles::text_primary()));

                let published = company.is_published.unwrap_or(false);
                let status_style = if published {
                    styles::status_green()
                } else {
                    styles::text_secondary()
                };
                spans.push(Span::styled("  ● ", status_style));
                spans.push(Span::styled(
                    publishing::status_label(published),
                    status_style,
                ));
            }
            None if self.state.company.loading => {
                spans.push(Span::styled("│ loading…", styles::text_muted()));
            }
            None => {}
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_state, TestTerminal};

    #[test]
    fn test_header_shows_company_and_private_status() {
        let mut term = TestTerminal::new();
        let state = loaded_state();

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("chatdesk"));
        assert!(term.buffer_contains("Acme Support"));
        assert!(term.buffer_contains("Private"));
    }

    #[test]
    fn test_header_shows_live_when_published() {
        let mut term = TestTerminal::new();
        let mut state = loaded_state();
        if let Some(company) = state.company.company.as_mut() {
            company.is_published = Some(true);
        }

        term.render_widget(MainHeader::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Live"));
    }
}
