//! Message processing
//!
//! Runs the TEA update loop for one incoming message and dispatches the
//! resulting actions.

use tokio::sync::{mpsc, watch};

use chatdesk_client::DashboardApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &A,
    shutdown_rx: &watch::Receiver<bool>,
) where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api, shutdown_rx.clone());
        }

        msg = result.message;
    }
}
