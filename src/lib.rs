//! chatdesk - knowledge base uploads and company settings from the terminal
//!
//! The binary is a thin shell over this library: it resolves settings,
//! builds the HTTP client and hands off to the TUI or the headless runner.

pub mod headless;

pub use headless::{run_headless_upload, HeadlessUpload};

use std::path::Path;
use std::time::Duration;

use chatdesk_app::config::{self, Settings};
use chatdesk_client::HttpClient;
use chatdesk_core::prelude::*;

/// Settings from `config_path` (or the default location), then the
/// environment, then `api_url` from the command line.
pub fn resolve_settings(config_path: Option<&Path>, api_url: Option<String>) -> Result<Settings> {
    let path = config_path
        .map(Path::to_path_buf)
        .or_else(config::default_config_path);

    let mut settings = match path {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };

    config::apply_env_overrides(&mut settings);
    if let Some(url) = api_url {
        settings.api.base_url = url;
    }

    config::validate_settings(&settings)?;
    Ok(settings)
}

/// Backend client for the resolved settings. `token` from the command line
/// wins over `CHATDESK_TOKEN`.
pub fn build_client(settings: &Settings, token: Option<String>) -> Result<HttpClient> {
    let token = token.or_else(config::token_from_env);
    if token.is_none() {
        warn!(
            "{} is not set; the backend will likely refuse requests",
            config::TOKEN_ENV
        );
    }
    HttpClient::new(
        settings.api.base_url.clone(),
        token,
        Duration::from_secs(settings.api.timeout_secs),
    )
}

/// Run the interactive dashboard
pub async fn run(settings: Settings, token: Option<String>) -> Result<()> {
    let api = build_client(&settings, token)?;
    let result = chatdesk_tui::run(settings, api).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("chatdesk exiting");
    result
}
