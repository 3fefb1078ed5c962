//! Upload modal: file queue or text form, then progress and success

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use chatdesk_app::state::AppState;
use chatdesk_app::text_upload::TextField;
use chatdesk_app::upload_workflow::UploadModalState;
use chatdesk_app::UploadStatus;
use chatdesk_core::{format_file_size, FileValidator, UploadMode};

use super::{modal_overlay, truncate_str};
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 24;

pub struct UploadModal<'a> {
    modal: &'a UploadModalState,
    validator: &'a FileValidator,
}

impl<'a> UploadModal<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            modal: &state.upload_modal,
            validator: &state.validator,
        }
    }

    fn render_tabs(&self, area: Rect, buf: &mut Buffer) {
        let locked = !self.modal.accepts_input();
        let tab = |mode: UploadMode| {
            let style = if self.modal.mode == mode {
                styles::focused_selected()
            } else if locked {
                styles::text_muted()
            } else {
                styles::text_secondary()
            };
            Span::styled(format!(" {} ", mode.label()), style)
        };
        Paragraph::new(Line::from(vec![
            tab(UploadMode::File),
            Span::raw("  "),
            tab(UploadMode::Text),
        ]))
        .centered()
        .render(area, buf);
    }

    fn render_progress(&self, area: Rect, buf: &mut Buffer) {
        let [_, label, gauge, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled("Uploading…", styles::text_primary()))
            .centered()
            .render(label, buf);

        let percent = self.modal.progress().percent();
        Gauge::default()
            .gauge_style(Style::default().fg(palette::ACCENT).bg(palette::DEEPEST_BG))
            .percent(percent)
            .label(format!("{}%", percent))
            .render(inset(gauge, 4), buf);
    }

    fn render_success(&self, area: Rect, buf: &mut Buffer) {
        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled("✓ Upload complete", styles::status_green().add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Your knowledge base has been updated.", styles::text_secondary())),
        ])
        .centered()
        .render(body, buf);
    }

    fn render_file_mode(&self, area: Rect, buf: &mut Buffer) {
        let queue = &self.modal.queue;
        let errors = queue.errors();
        let [drop_zone, input, list, error_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(errors.len() as u16),
        ])
        .areas(area);

        let count_hint = if queue.is_multiple() {
            "Multiple files allowed"
        } else {
            "One file at a time"
        };
        let zone = styles::glass_block(false);
        let zone_inner = zone.inner(drop_zone);
        zone.render(drop_zone, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Drop files onto the terminal or type a path below",
                styles::text_primary(),
            )),
            Line::from(Span::styled(
                format!(
                    "{} · max {} · {}",
                    self.validator.accept(),
                    format_file_size(self.validator.max_size_bytes()),
                    count_hint
                ),
                styles::text_muted(),
            )),
        ])
        .centered()
        .render(zone_inner, buf);

        render_input(
            "Path",
            &self.modal.path_input,
            true,
            input,
            buf,
        );

        let list_block = styles::glass_block(false).title(format!(
            " Selected ({}, {}) ",
            queue.len(),
            format_file_size(queue.total_size())
        ));
        let list_inner = list_block.inner(list);
        list_block.render(list, buf);

        if queue.is_empty() {
            Paragraph::new(Span::styled("No files selected", styles::text_muted()))
                .render(list_inner, buf);
        } else {
            let name_width = list_inner.width.saturating_sub(12) as usize;
            let lines: Vec<Line> = queue
                .files()
                .iter()
                .enumerate()
                .map(|(index, file)| {
                    let selected = index == self.modal.selected_file;
                    let style = if selected {
                        styles::focused_selected()
                    } else {
                        styles::text_primary()
                    };
                    Line::from(vec![
                        Span::styled(
                            format!(" {:<width$}", truncate_str(&file.name, name_width), width = name_width),
                            style,
                        ),
                        Span::styled(
                            format!("{:>10}", format_file_size(file.size)),
                            if selected { style } else { styles::text_muted() },
                        ),
                    ])
                })
                .collect();
            Paragraph::new(lines).render(list_inner, buf);
        }

        render_errors(errors.iter().map(String::as_str), error_area, buf);
    }

    fn render_text_mode(&self, area: Rect, buf: &mut Buffer) {
        let form = &self.modal.text_form;
        let errors: Vec<&str> = [form.filename_error.as_deref(), form.content_error.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let [filename, content, counter, error_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(errors.len() as u16),
        ])
        .areas(area);

        render_input(
            "Filename",
            &form.filename,
            form.focus == TextField::Filename,
            filename,
            buf,
        );

        let content_focused = form.focus == TextField::Content;
        let block = styles::glass_block(content_focused).title(" Content ");
        let inner = block.inner(content);
        block.render(content, buf);
        if form.content.is_empty() && !content_focused {
            Paragraph::new(Span::styled(
                "Paste or type the text to add",
                styles::text_muted(),
            ))
            .render(inner, buf);
        } else {
            let mut text = form.content.clone();
            if content_focused {
                text.push('▏');
            }
            Paragraph::new(text)
                .style(styles::text_primary())
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }

        Paragraph::new(Span::styled(
            format!("{} characters · {} words", form.char_count(), form.word_count()),
            styles::text_muted(),
        ))
        .right_aligned()
        .render(counter, buf);

        render_errors(errors.into_iter(), error_area, buf);
    }
}

impl Widget for UploadModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::prepare_modal(buf, area, modal);

        let block = styles::modal_block(" Add to Knowledge Base ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [tabs, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        self.render_tabs(tabs, buf);
        let body = inset(body, 1);
        match self.modal.status() {
            UploadStatus::Uploading => self.render_progress(body, buf),
            UploadStatus::Success => self.render_success(body, buf),
            UploadStatus::Idle if self.modal.is_loading() => self.render_progress(body, buf),
            UploadStatus::Idle => match self.modal.mode {
                UploadMode::File => self.render_file_mode(body, buf),
                UploadMode::Text => self.render_text_mode(body, buf),
            },
        }
    }
}

fn render_input(label: &str, value: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let block = styles::glass_block(focused).title(format!(" {} ", label));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut spans = vec![Span::styled(value.to_string(), styles::text_primary())];
    if focused {
        spans.push(Span::styled("▏", styles::accent()));
    }
    Paragraph::new(Line::from(spans)).render(inner, buf);
}

fn render_errors<'a>(errors: impl Iterator<Item = &'a str>, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = errors
        .map(|e| Line::from(Span::styled(format!("✗ {}", e), styles::status_red())))
        .collect();
    Paragraph::new(lines).render(area, buf);
}

/// Shrink `area` horizontally by `margin` cells on each side
fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        width: area.width.saturating_sub(margin * 2),
        ..area
    }
}
