//! Terminal setup and restoration

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use chatdesk_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableBracketedPaste);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enter the alternate screen with bracketed paste on.
///
/// Terminals deliver drag-and-dropped files as a paste, so paste support is
/// what makes dropping documents onto the dashboard work.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    let term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    execute!(std::io::stdout(), EnableBracketedPaste)?;
    Ok(term)
}

pub fn restore() {
    if let Err(e) = execute!(std::io::stdout(), DisableBracketedPaste) {
        warn!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();
}
