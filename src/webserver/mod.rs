mod server;

pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

// Public API for starting/stopping the webserver
pub use server::{shutdown, start_server};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, MemoryCache};
    use crate::engine::{Classification, LexiconEngine, ScoringEngine};
    use crate::errors::{ClassifierError, ClassifierResult};
    use crate::metrics::MetricsTracker;
    use crate::orchestrator::RequestOrchestrator;
    use crate::store::SqliteStore;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    /// Engine fake that always fails
    struct BrokenEngine;

    #[async_trait]
    impl ScoringEngine for BrokenEngine {
        async fn classify(&self, _text: &str) -> ClassifierResult<Classification> {
            Err(ClassifierError::InferenceFailed("model unavailable".to_string()))
        }
    }

    fn router_with_engine(engine: Arc<dyn ScoringEngine>) -> axum::Router {
        let orchestrator = Arc::new(RequestOrchestrator::new(
            engine,
            Arc::new(MemoryCache::new(CacheConfig::custom(60, 100))),
            Arc::new(SqliteStore::open_in_memory().unwrap()),
            Arc::new(MetricsTracker::new()),
            Duration::from_secs(60),
            Duration::from_secs(5),
        ));
        routes::create_router(Arc::new(state::AppState::new(orchestrator)))
    }

    fn test_router() -> axum::Router {
        router_with_engine(Arc::new(LexiconEngine::new()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint() {
        let app = test_router();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn analyze_then_metrics() {
        let app = test_router();

        let request = Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text": "what a great day"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["input"], "what a great day");
        assert_eq!(body["cached"], false);
        assert_eq!(body["result"]["label"], "POSITIVE");
        assert!(body["result"]["score"].is_number());

        // Repeat comes from the cache
        let request = Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text": "what a great day"}"#))
            .unwrap();
        let body = body_json(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(body["cached"], true);

        let response = app
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["requests"], 2);
        assert!(body["avg_latency_ms"].is_number());
    }

    #[tokio::test]
    async fn analyze_surfaces_inference_failure_as_500() {
        let app = router_with_engine(Arc::new(BrokenEngine));

        let request = Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text": "anything"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(body["error"].is_string());

        // The failed request still counts in the metrics projection
        let response = app
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await["requests"], 1);
    }

    #[tokio::test]
    async fn analyze_rejects_malformed_body() {
        let app = test_router();

        let request = Request::post("/analyze")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"nope": 1}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
