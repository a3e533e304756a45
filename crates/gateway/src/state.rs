//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::GatewayConfig;

/// Application state shared across handlers.
///
/// Conversion itself is stateless; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
