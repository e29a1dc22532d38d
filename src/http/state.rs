//! Application state for the HTTP server.

use std::sync::Arc;

use crate::fakedata::FakeDataSource;
use crate::store::PersonStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative person collection
    pub store: Arc<dyn PersonStore>,
    /// Generator feeding the nations and currencies endpoints
    pub faker: Arc<dyn FakeDataSource>,
}

impl AppState {
    /// Create a new application state with the given collaborators.
    pub fn new(store: Arc<dyn PersonStore>, faker: Arc<dyn FakeDataSource>) -> Self {
        Self { store, faker }
    }
}
