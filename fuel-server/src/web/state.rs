//! Application state for the web layer.

use std::sync::Arc;

use crate::gateway::StationGateway;
use crate::upstream::Upstream;

/// Shared application state.
pub struct AppState<U> {
    /// Station data gateway
    pub gateway: Arc<StationGateway<U>>,
}

impl<U: Upstream> AppState<U> {
    /// Create a new app state.
    pub fn new(gateway: StationGateway<U>) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

// Manual impl: cloning shares the gateway and must not require `U: Clone`.
impl<U> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}
