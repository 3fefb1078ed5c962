//! Terminal-independent key input.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary
//! so the handlers here never depend on a terminal library.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+s, Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Ctrl+C quits from every screen
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_distinct_from_plain_char() {
        assert_ne!(InputKey::CharCtrl('s'), InputKey::Char('s'));
        assert!(InputKey::CharCtrl('c').is_force_quit());
        assert!(!InputKey::Char('c').is_force_quit());
    }
}
