//! Settings screen: company profile, chatbot copy and publishing

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use chatdesk_app::publishing;
use chatdesk_app::settings_items::{settings_items, SettingItem, SettingValue};
use chatdesk_app::state::{AppState, SettingsViewState};

use super::truncate_str;
use crate::theme::{palette, styles};

const INDICATOR_WIDTH: u16 = 3;
const LABEL_WIDTH: u16 = 22;

pub struct SettingsPanel<'a> {
    state: &'a AppState,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_rows(&self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.settings_view_state;
        let items = settings_items(&self.state.settings_tracker);
        let mut y = area.y;
        let mut section = "";

        for (index, item) in items.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            if item.section != section {
                if !section.is_empty() {
                    y += 1;
                }
                section = item.section.as_str();
                if y >= area.bottom() {
                    break;
                }
                buf.set_string(area.x + 1, y, section, styles::accent_bold());
                y += 1;
            }
            if y + 1 >= area.bottom() {
                break;
            }
            render_row(area.x, y, area.width, buf, item, index == view.selected_index, view);
            y += 2;
        }
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let working = self.state.settings_tracker.working();
        let origin = &self.state.settings.publishing.public_origin;

        let line = if working.slug.is_empty() {
            Line::from(Span::styled(
                "Public URL: set a slug first",
                styles::text_muted(),
            ))
        } else {
            Line::from(vec![
                Span::styled("Public URL: ", styles::text_muted()),
                Span::styled(
                    publishing::public_path_url(origin, &working.slug),
                    styles::accent(),
                ),
            ])
        };
        Paragraph::new(line).render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.settings_view_state;
        let line = if self.state.company.saving {
            Line::from(Span::styled("Saving…", styles::status_yellow()))
        } else if let Some(error) = view.error.as_ref().or(self.state.company.error.as_ref()) {
            Line::from(Span::styled(format!("✗ {}", error), styles::status_red()))
        } else if self.state.settings_tracker.has_changes() {
            let count = self.state.settings_tracker.get_changes().changed_fields.len();
            Line::from(Span::styled(
                format!("{} unsaved change{}", count, if count == 1 { "" } else { "s" }),
                styles::status_yellow(),
            ))
        } else {
            Line::from(Span::styled("All changes saved", styles::text_muted()))
        };
        Paragraph::new(line).render(area, buf);
    }
}

fn render_row(
    x: u16,
    y: u16,
    width: u16,
    buf: &mut Buffer,
    item: &SettingItem,
    selected: bool,
    view: &SettingsViewState,
) {
    if selected {
        for col in x..x + width {
            if let Some(cell) = buf.cell_mut((col, y)) {
                cell.set_bg(palette::POPUP_BG);
            }
        }
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol("▎").set_fg(palette::ACCENT);
        }
    }

    let mut col = x + INDICATOR_WIDTH;
    let label_style = if !item.is_interactive() {
        styles::text_muted()
    } else if selected {
        styles::text_primary().add_modifier(Modifier::BOLD)
    } else {
        styles::text_secondary()
    };
    buf.set_string(
        col,
        y,
        format!(
            "{:<width$}",
            truncate_str(&item.label, LABEL_WIDTH as usize - 1),
            width = LABEL_WIDTH as usize
        ),
        label_style,
    );
    col += LABEL_WIDTH;

    let value_width = width.saturating_sub(col - x + 2) as usize;
    if selected && view.editing {
        buf.set_string(
            col,
            y,
            truncate_str(&format!("{}▌", view.edit_buffer), value_width),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::UNDERLINED),
        );
    } else {
        let mut display = item.value.display();
        if item.modified {
            display.push('*');
        }
        if item.readonly {
            display.push_str("  (read-only)");
        }
        let value_style = match &item.value {
            _ if !item.is_interactive() => styles::text_muted(),
            SettingValue::Bool(true) => styles::status_green(),
            SettingValue::Bool(false) => styles::status_red(),
            SettingValue::Text(s) if s.is_empty() => styles::text_muted(),
            SettingValue::Text(_) => styles::text_primary(),
        };
        buf.set_string(col, y, truncate_str(&display, value_width), value_style);
    }

    buf.set_string(
        x + INDICATOR_WIDTH,
        y + 1,
        truncate_str(&item.description, width.saturating_sub(INDICATOR_WIDTH + 1) as usize),
        styles::text_muted(),
    );
}

impl Widget for SettingsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Company Settings ");
        let inner = block.inner(area);
        block.render(area, buf);

        let [rows, preview, footer] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.render_rows(rows, buf);
        self.render_preview(preview, buf);
        self.render_footer(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_state, TestTerminal};
    use chatdesk_app::settings_tracker::{FieldValue, SettingsField};

    fn settings_state() -> AppState {
        let mut state = loaded_state();
        state.show_settings();
        state
    }

    #[test]
    fn test_sections_and_rows_render() {
        let mut term = TestTerminal::new();
        let state = settings_state();

        term.render_widget(SettingsPanel::new(&state), term.area());

        for text in ["Profile", "Chatbot", "Publishing", "Acme Support", "(read-only)"] {
            assert!(term.buffer_contains(text), "missing {:?}\n{}", text, term.content());
        }
        assert!(term.buffer_contains("All changes saved"));
    }

    #[test]
    fn test_modified_value_marked_and_counted() {
        let mut term = TestTerminal::new();
        let mut state = settings_state();
        state
            .settings_tracker
            .update_field(SettingsField::Slug, FieldValue::Text("acme".into()))
            .unwrap();

        term.render_widget(SettingsPanel::new(&state), term.area());

        assert!(term.buffer_contains("acme*"));
        assert!(term.buffer_contains("1 unsaved change"));
        assert!(term.buffer_contains("/acme"));
    }

    #[test]
    fn test_edit_buffer_shown_with_cursor() {
        let mut term = TestTerminal::new();
        let mut state = settings_state();
        state.settings_view_state.selected_index = 2;
        state.settings_view_state.start_editing("new-slug");

        term.render_widget(SettingsPanel::new(&state), term.area());

        assert!(term.buffer_contains("new-slug▌"));
    }

    #[test]
    fn test_error_and_saving_footer() {
        let mut term = TestTerminal::new();
        let mut state = settings_state();
        state.settings_view_state.error = Some("Name is managed by your account".into());
        term.render_widget(SettingsPanel::new(&state), term.area());
        assert!(term.buffer_contains("Name is managed by your account"));

        state.company.saving = true;
        term.render_widget(SettingsPanel::new(&state), term.area());
        assert!(term.buffer_contains("Saving"));
    }
}
