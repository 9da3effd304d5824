/// Shared application state for the webserver
///
/// References to the orchestration core that route handlers need.
use crate::orchestrator::RequestOrchestrator;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    /// The cache-aside request core
    pub orchestrator: Arc<RequestOrchestrator>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(orchestrator: Arc<RequestOrchestrator>) -> Self {
        Self {
            orchestrator,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
