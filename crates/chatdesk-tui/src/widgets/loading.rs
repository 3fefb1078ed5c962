//! Startup screen shown until the company record arrives

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use chatdesk_app::remote_settings::CompanyState;

use crate::theme::styles;

pub struct LoadingScreen<'a> {
    company: &'a CompanyState,
    api_url: &'a str,
}

impl<'a> LoadingScreen<'a> {
    pub fn new(company: &'a CompanyState, api_url: &'a str) -> Self {
        Self { company, api_url }
    }
}

impl Widget for LoadingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let lines = match (&self.company.error, self.company.loading) {
            (_, true) => vec![
                Line::from(Span::styled("Loading company profile…", styles::accent_bold())),
                Line::from(""),
                Line::from(Span::styled(self.api_url.to_string(), styles::text_muted())),
            ],
            (Some(error), false) => vec![
                Line::from(Span::styled("Could not load company profile", styles::status_red())),
                Line::from(""),
                Line::from(Span::styled(error.clone(), styles::text_secondary())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", styles::text_muted()),
                    Span::styled("r", styles::keybinding()),
                    Span::styled(" to retry or ", styles::text_muted()),
                    Span::styled("q", styles::keybinding()),
                    Span::styled(" to quit", styles::text_muted()),
                ]),
            ],
            (None, false) => vec![Line::from(Span::styled("Starting…", styles::text_muted()))],
        };

        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}
