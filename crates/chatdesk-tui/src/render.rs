//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use chatdesk_app::state::{AppState, UiMode};

use crate::theme::palette;
use crate::widgets;

/// Render the complete UI. Pure: reads state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(widgets::MainHeader::new(state), header);

    let screen = match state.ui_mode {
        UiMode::ConfirmDialog => state
            .confirm_dialog_state
            .as_ref()
            .map(|dialog| dialog.return_mode)
            .unwrap_or(UiMode::KnowledgeBase),
        mode => mode,
    };
    render_screen(frame, state, screen, body);

    if let (UiMode::ConfirmDialog, Some(dialog)) =
        (state.ui_mode, state.confirm_dialog_state.as_ref())
    {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }

    frame.render_widget(widgets::StatusBar::new(state), status);
}

fn render_screen(frame: &mut Frame, state: &AppState, screen: UiMode, area: Rect) {
    match screen {
        UiMode::Loading => frame.render_widget(
            widgets::LoadingScreen::new(&state.company, &state.settings.api.base_url),
            area,
        ),
        UiMode::KnowledgeBase | UiMode::ConfirmDialog => {
            frame.render_widget(widgets::KnowledgeBase::new(state), area)
        }
        UiMode::UploadModal => {
            frame.render_widget(widgets::KnowledgeBase::new(state), area);
            frame.render_widget(widgets::UploadModal::new(state), frame.area());
        }
        UiMode::Settings => frame.render_widget(widgets::SettingsPanel::new(state), area),
    }
}
