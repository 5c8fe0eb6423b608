//! Application state shared across handlers

use std::sync::Arc;

/// Shared application state accessible via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub api_key: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(api_key: impl Into<Arc<str>>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}
