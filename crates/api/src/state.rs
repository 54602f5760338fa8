//! Application state shared across handlers.

use std::sync::Arc;

use openai_brain::QaBrain;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Model front end for all endpoints.
    pub brain: Arc<QaBrain>,
}

impl AppState {
    /// Create new application state.
    pub fn new(brain: QaBrain) -> Self {
        Self {
            brain: Arc::new(brain),
        }
    }
}
