//! Engine - shared orchestration state for the TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the backend client every background task talks to.

use tokio::sync::{mpsc, watch};
use tracing::info;

use chatdesk_client::DashboardApi;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for chatdesk.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (terminal events, signal handler).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    api: A,
}

impl<A> Engine<A>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    /// Create the engine and spawn the signal handler.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(settings: Settings, api: A) -> Self {
        let engine = Self::without_signals(settings, api);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Same as [`Engine::new`] without OS signal handling (tests, embedding).
    pub fn without_signals(settings: Settings, api: A) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            api,
        }
    }

    /// Kick off the first company fetch
    pub fn start(&mut self) {
        self.process_message(Message::RefreshCompany);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.api,
            &self.shutdown_rx,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Get a clone of the shutdown receiver for background tasks.
    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks to stop.
    pub fn shutdown(&mut self) {
        if self.state.upload_in_flight() {
            info!("Shutting down with an upload in flight; its result will not be shown");
        }
        let _ = self.shutdown_tx.send(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UiMode;
    use chatdesk_client::test_utils::{test_company, MockApi};

    #[tokio::test]
    async fn test_start_loads_company() {
        let api = MockApi::with_company(test_company("Acme"));
        let mut engine = Engine::without_signals(Settings::default(), api);

        engine.start();
        assert!(engine.state.company.loading);

        let msg = engine.msg_rx.recv().await.unwrap();
        engine.process_message(msg);

        assert_eq!(engine.state.ui_mode, UiMode::KnowledgeBase);
        assert_eq!(
            engine.state.settings_tracker.working().name,
            "Acme".to_string()
        );
    }

    #[tokio::test]
    async fn test_shutdown_sets_flag() {
        let api = MockApi::new();
        let mut engine = Engine::without_signals(Settings::default(), api);
        let rx = engine.shutdown_receiver();

        engine.shutdown();
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn test_quit_message_sets_should_quit() {
        let mut engine = Engine::without_signals(Settings::default(), MockApi::new());
        engine.msg_sender().send(Message::Quit).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 1);
        assert!(engine.should_quit());
    }
}
