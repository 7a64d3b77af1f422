//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed by
//! page handlers. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.

use crate::server::backend::BackendClient;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `BackendClient` wraps a `reqwest::Client`, which uses an `Arc`
/// internally, plus the parsed base URL.
#[derive(Clone)]
pub struct AppState {
    /// Client for the backend API that owns destinations, trips, guides,
    /// registrations and authentication.
    pub backend: BackendClient,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `backend` - Configured backend API client
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}
