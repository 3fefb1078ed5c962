//! Main TUI runner - entry point and event loop

use chatdesk_app::config::Settings;
use chatdesk_app::Engine;
use chatdesk_client::DashboardApi;
use chatdesk_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits or a signal arrives
pub async fn run<A>(settings: Settings, api: A) -> Result<()>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    info!("Starting dashboard against {}", settings.api.base_url);
    let mut engine = Engine::new(settings, api);
    let mut term = terminal::init()?;

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    result
}

/// Drain task results, draw, then wait up to one poll period for input
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: DashboardApi + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}
