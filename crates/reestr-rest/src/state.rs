//! Application state for Axum handlers.

use reestr_service::DirectoryService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub directory_service: Arc<dyn DirectoryService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(directory_service: Arc<dyn DirectoryService>) -> Self {
        Self { directory_service }
    }
}
