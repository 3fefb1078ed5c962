//! chatdesk-app - Application state and orchestration for chatdesk
//!
//! Implements the TEA (The Elm Architecture) pattern: [`AppState`] is the
//! model, [`handler::update`] the update function, and [`Engine`] drives
//! both while background tasks talk to the backend through
//! [`chatdesk_client::DashboardApi`].
//!
//! Upload workflow: [`upload_queue`], [`text_upload`], [`progress`] and
//! [`upload_workflow`]. Company settings: [`settings_tracker`],
//! [`remote_settings`] and [`publishing`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod progress;
pub mod publishing;
pub mod remote_settings;
pub mod settings_items;
pub mod settings_tracker;
pub mod signals;
pub mod state;
pub mod text_upload;
pub mod upload_queue;
pub mod upload_workflow;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult, UploadJob};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use upload_workflow::{UploadId, UploadStatus};
