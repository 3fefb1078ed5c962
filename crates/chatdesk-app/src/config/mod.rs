//! Configuration for chatdesk
//!
//! Supports:
//! - `<config dir>/chatdesk/config.toml` - Global settings
//! - `CHATDESK_API_URL` / `CHATDESK_TOKEN` - Environment overrides

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_dir, load_settings, token_from_env,
    validate_settings, API_URL_ENV, TOKEN_ENV,
};
pub use types::*;
