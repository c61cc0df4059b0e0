//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::CompletionProvider;

/// Immutable per-process state, cloned into every request
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionProvider>,
    pub credential_configured: bool,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionProvider>, credential_configured: bool) -> Self {
        Self {
            completion,
            credential_configured,
        }
    }
}
