//! # chatdesk-client - Backend Client
//!
//! Talks to the chatbot backend over REST: knowledge base uploads and company
//! settings.
//!
//! Depends on [`chatdesk_core`] for wire types and error handling.
//!
//! ## Public API
//!
//! - [`DashboardApi`] - Async backend operations the app layer is generic over
//! - [`HttpClient`] - reqwest implementation with bearer-token auth
//! - `test_utils::MockApi` - Recording in-memory backend (feature `test-helpers`)

pub mod api;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{DashboardApi, LocalDashboardApi};
pub use http::{HttpClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
