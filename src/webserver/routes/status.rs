use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::{
    arguments::is_debug_webserver_enabled,
    logger::{self, LogTag},
    webserver::{models::HealthResponse, state::AppState, utils::success_response},
};

/// Create status routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// GET /health
///
/// Liveness only - no dependency checks.
async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    if is_debug_webserver_enabled() {
        logger::debug(
            LogTag::Webserver,
            &format!("Health check endpoint called (uptime {}s)", state.uptime_seconds()),
        );
    }

    success_response(HealthResponse {
        status: "ok".to_string(),
    })
}
