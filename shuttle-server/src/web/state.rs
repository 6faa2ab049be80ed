//! Application state for the web layer.

use std::sync::Arc;

use crate::service::ShuttleService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Booking sessions and the services behind them
    pub service: Arc<ShuttleService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(service: ShuttleService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
