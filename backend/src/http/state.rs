//! Application state for the HTTP server.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::services::{Dashboard, MemorySurface};

/// Dashboard type served over HTTP.
pub type SharedDashboard = Arc<RwLock<Dashboard<MemorySurface>>>;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single dashboard; parse outside the lock, commit under the write lock
    pub dashboard: SharedDashboard,
    /// Upload size limit in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create a new application state around an empty dashboard.
    pub fn new(max_body_bytes: usize) -> Self {
        Self::with_dashboard(Dashboard::new(MemorySurface::new()), max_body_bytes)
    }

    pub fn with_dashboard(dashboard: Dashboard<MemorySurface>, max_body_bytes: usize) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
            max_body_bytes,
        }
    }
}
