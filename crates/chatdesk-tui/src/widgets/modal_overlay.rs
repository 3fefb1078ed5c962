//! Helpers shared by the modal widgets: centering, dimming and shadows.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect in `area`, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + area.height.saturating_sub(h) / 2;
    Rect::new(x, y, w, h)
}

/// Restyle every cell of `area` so the screen behind a modal recedes.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();

    for y in modal.top().saturating_add(1)..=bottom {
        if let Some(cell) = buf.cell_mut((right, y)) {
            cell.set_char(' ').set_style(shadow);
        }
    }
    for x in modal.left().saturating_add(1)..=right {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            cell.set_char(' ').set_style(shadow);
        }
    }
}

/// Dim the screen, drop a shadow and clear the modal area.
pub fn prepare_modal(buf: &mut Buffer, screen: Rect, modal: Rect) {
    dim_background(buf, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
}
