//! Custom widget components

mod confirm_dialog;
mod header;
mod knowledge_base;
mod loading;
pub mod modal_overlay;
mod settings_panel;
mod status_bar;
mod upload_modal;

pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use knowledge_base::KnowledgeBase;
pub use loading::LoadingScreen;
pub use settings_panel::SettingsPanel;
pub use status_bar::StatusBar;
pub use upload_modal::UploadModal;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max` display columns, marking the cut with `…`
pub(crate) fn truncate_str(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
