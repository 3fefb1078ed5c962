//! Loading `config.toml` and applying environment overrides

use std::path::{Path, PathBuf};

use chatdesk_core::prelude::*;

use super::types::Settings;

const APP_DIR: &str = "chatdesk";
const CONFIG_FILENAME: &str = "config.toml";

/// Environment variable overriding `[api] base_url`
pub const API_URL_ENV: &str = "CHATDESK_API_URL";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "CHATDESK_TOKEN";

/// `<config dir>/chatdesk/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply `CHATDESK_API_URL` on top of the file settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            debug!("{} overrides api.base_url", API_URL_ENV);
            settings.api.base_url = url.trim().to_string();
        }
    }
}

/// Bearer token from the environment, if set
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Check values that would make the app misbehave
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if url::Url::parse(&settings.api.base_url).is_err() {
        return Err(Error::config_invalid(format!(
            "api.base_url is not a valid URL: {}",
            settings.api.base_url
        )));
    }
    if settings.upload.progress_tick_ms == 0 {
        return Err(Error::config_invalid("upload.progress_tick_ms must be > 0"));
    }
    if settings.api.timeout_secs == 0 {
        return Err(Error::config_invalid("api.timeout_secs must be > 0"));
    }
    Ok(())
}

/// Write a commented default config file if none exists
pub fn init_config_dir(config_path: &Path) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    if config_path.exists() {
        return Ok(());
    }

    let default_content = r#"# chatdesk configuration

[api]
base_url = "http://localhost:8000"
timeout_secs = 60
# The bearer token is read from CHATDESK_TOKEN

[upload]
max_size_bytes = 10485760           # 10 MB
accept = ".txt,.pdf,.doc,.docx,.md" # extensions or MIME fragments
multiple = false                    # allow several files per submission
progress_tick_ms = 300
success_dwell_ms = 1200             # how long the success view stays up

[publishing]
public_origin = "http://localhost:3000"

[behavior]
confirm_discard = true  # ask before leaving settings with unsaved edits
confirm_quit = true     # ask before quitting during an upload
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}
