use crate::webserver::state::AppState;
use axum::Router;
use std::sync::Arc;

pub mod analyze;
pub mod metrics;
pub mod status;

/// Build the service router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(analyze::routes())
        .merge(metrics::routes())
        .merge(status::routes())
        .with_state(state)
}
