//! # chatdesk-core - Core Domain Types
//!
//! Foundation crate for chatdesk. Provides domain types, error handling,
//! file validation and the wire types shared with the chatbot backend.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url, dirs).
//!
//! ## Public API
//!
//! ### Files (`files`, `validation`, `drop_paths`)
//! - [`CandidateFile`] - A file picked for upload (metadata plus path)
//! - [`FileValidator`] - Size and type policy for knowledge base uploads
//! - [`format_file_size()`] - Human-readable byte sizes
//! - [`parse_dropped_paths()`] - Turn pasted/dropped text into a batch of paths
//!
//! ### Backend Types (`company`)
//! - [`Company`] - Authoritative company record
//! - [`BatchUpdateSettingsRequest`] / [`BatchUpdateSettingsResponse`]
//! - [`UploadReceipt`], [`TextUploadRequest`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use chatdesk_core::prelude::*;
//! ```

pub mod company;
pub mod drop_paths;
pub mod error;
pub mod files;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all chatdesk crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use company::{
    BatchUpdateSettingsRequest, BatchUpdateSettingsResponse, Company, TextUploadRequest,
    UploadReceipt,
};
pub use drop_paths::parse_dropped_paths;
pub use error::{Error, Result, ResultExt};
pub use files::{format_file_size, mime_for_extension, CandidateFile};
pub use types::{AppPhase, Notice, NoticeLevel, UploadMode};
pub use validation::{FileValidator, DEFAULT_ACCEPT, DEFAULT_MAX_SIZE_BYTES};
