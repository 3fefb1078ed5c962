//! chatdesk-tui - Terminal UI for chatdesk
//!
//! Creates an Engine from chatdesk-app and adds terminal rendering, event
//! polling and the dashboard widgets.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
