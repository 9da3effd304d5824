use axum::{extract::State, response::Response, routing::get, Router};
use std::sync::Arc;

use crate::webserver::{models::MetricsResponse, state::AppState, utils::success_response};

/// Create metrics routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/metrics", get(metrics))
}

/// GET /metrics
async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.orchestrator.metrics().snapshot();

    success_response(MetricsResponse {
        requests: snapshot.requests,
        avg_latency_ms: snapshot.avg_latency_ms,
    })
}
