//! Application state for the projection preview service.

use crate::config::ServerConfig;

/// Shared application state.
///
/// Read-only after startup; every request builds its own transform.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
