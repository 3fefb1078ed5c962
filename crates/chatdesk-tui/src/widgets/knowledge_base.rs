//! Main dashboard screen: recent uploads and the chatbot's public presence

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use chatdesk_app::publishing;
use chatdesk_app::state::AppState;
use chatdesk_core::UploadMode;

use crate::theme::styles;

pub struct KnowledgeBase<'a> {
    state: &'a AppState,
}

impl<'a> KnowledgeBase<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_uploads(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Knowledge Base ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.state.recent_uploads.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No documents uploaded this session.",
                    styles::text_secondary(),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", styles::text_muted()),
                    Span::styled("a", styles::keybinding()),
                    Span::styled(
                        " to add files or text, or drop files onto the terminal.",
                        styles::text_muted(),
                    ),
                ]),
            ];
            Paragraph::new(lines)
                .centered()
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .state
            .recent_uploads
            .iter()
            .take(inner.height as usize)
            .map(|upload| {
                let kind = match upload.mode {
                    UploadMode::File => "file",
                    UploadMode::Text => "text",
                };
                Line::from(vec![
                    Span::styled(
                        upload.uploaded_at.format("%H:%M:%S ").to_string(),
                        styles::text_muted(),
                    ),
                    Span::styled(format!("{:<5}", kind), styles::accent()),
                    Span::styled(upload.name.clone(), styles::text_primary()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_chatbot(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Chatbot ");
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(company) = self.state.company.company.as_ref() else {
            Paragraph::new(Span::styled("Company profile not loaded", styles::text_muted()))
                .render(inner, buf);
            return;
        };

        let form = self.state.settings_tracker.baseline();
        let published = company.is_published.unwrap_or(false);
        let mut lines = vec![
            field_line("Title", &form.chatbot_title),
            field_line("About", &form.chatbot_description),
            Line::from(vec![
                Span::styled("Status  ", styles::text_muted()),
                Span::styled(
                    publishing::status_label(published),
                    if published {
                        styles::status_green()
                    } else {
                        styles::text_secondary()
                    },
                ),
            ]),
            Line::from(""),
        ];

        match company.slug() {
            Some(slug) => {
                let origin = &self.state.settings.publishing.public_origin;
                lines.push(field_line("Page", &publishing::public_path_url(origin, slug)));
                if let Some(url) = publishing::subdomain_url(origin, slug) {
                    lines.push(field_line("Domain", &url));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "Set a slug in settings to get a public address.",
                styles::text_muted(),
            ))),
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn field_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), styles::text_muted()),
        Span::styled(value.to_string(), styles::text_primary()),
    ])
}

impl Widget for KnowledgeBase<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [uploads, chatbot] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);
        self.render_uploads(uploads, buf);
        self.render_chatbot(chatbot, buf);
    }
}
