/// API response type definitions
///
/// Standard response structures for REST API endpoints
use crate::engine::Classification;
use serde::{Deserialize, Serialize};

/// Body of POST /analyze responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub input: String,
    pub result: Classification,
    pub cached: bool,
}

/// Body of GET /metrics - direct projection of the metrics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub requests: u64,
    pub avg_latency_ms: f64,
}

/// Simple health check response (liveness only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
