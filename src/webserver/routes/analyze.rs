use axum::{extract::State, http::StatusCode, response::Response, routing::post, Json, Router};
use std::sync::Arc;

use crate::{
    arguments::is_debug_webserver_enabled,
    errors::ClassifierError,
    logger::{self, LogTag},
    webserver::{
        models::{AnalyzeRequest, AnalyzeResponse},
        state::AppState,
        utils::{error_response, success_response},
    },
};

/// Create analyze routes
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

/// POST /analyze
///
/// Classifies the request text through the cache-aside core. Only an
/// inference failure produces an error status; infrastructure faults are
/// absorbed upstream.
async fn analyze(State(state): State<Arc<AppState>>, Json(request): Json<AnalyzeRequest>) -> Response {
    if is_debug_webserver_enabled() {
        logger::debug(
            LogTag::Webserver,
            &format!("Analyze request ({} bytes)", request.text.len()),
        );
    }

    match state.orchestrator.analyze(&request.text).await {
        Ok(analysis) => success_response(AnalyzeResponse {
            input: request.text,
            result: analysis.result,
            cached: analysis.cached,
        }),
        Err(ClassifierError::InferenceFailed(reason)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &reason)
        }
        Err(e) => {
            // Absorbed error kinds never escape the orchestrator; anything
            // else here is a bug worth surfacing loudly.
            logger::error(LogTag::Webserver, &format!("Unexpected analyze error: {}", e));
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
