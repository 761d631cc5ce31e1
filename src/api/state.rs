//! Application State
//!
//! Shared state accessible by all API handlers.
//! Only immutable configuration is shared; every request builds its own
//! generator and dataset.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{DashboardConfig, ServerConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Seed and map settings for each run
    pub dashboard: Arc<DashboardConfig>,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dashboard: DashboardConfig, server: ServerConfig) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            server: Arc::new(server),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
