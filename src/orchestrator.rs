/// Cache-aside request orchestration
///
/// Per-request path: Start → CacheLookup → {CacheHit | CacheMiss} →
/// [ScoringEngine → Persist] → MetricsRecord → Done.
///
/// Consistency discipline:
/// - a cache hit skips the engine and the result store entirely
/// - a miss (absent, expired, or cache fault) makes at most one engine
///   call, then best-effort write-through to cache and store
/// - only `InferenceFailed` reaches the caller; cache/store faults
///   degrade freshness or audit completeness, never availability
/// - the metrics record is the terminal, unconditional step on every
///   path, including failed inference
use crate::cache::CacheStore;
use crate::engine::{Classification, ScoringEngine};
use crate::errors::{ClassifierError, ClassifierResult};
use crate::logger::{self, LogTag};
use crate::metrics::MetricsTracker;
use crate::store::{ResultRecord, ResultStore};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one analyze request
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: Classification,
    pub cached: bool,
}

pub struct RequestOrchestrator {
    engine: Arc<dyn ScoringEngine>,
    cache: Arc<dyn CacheStore>,
    store: Arc<dyn ResultStore>,
    metrics: Arc<MetricsTracker>,
    cache_ttl: Duration,
    engine_timeout: Duration,
}

impl RequestOrchestrator {
    /// All collaborators are injected; the orchestrator owns no
    /// connections and holds no locks of its own.
    pub fn new(
        engine: Arc<dyn ScoringEngine>,
        cache: Arc<dyn CacheStore>,
        store: Arc<dyn ResultStore>,
        metrics: Arc<MetricsTracker>,
        cache_ttl: Duration,
        engine_timeout: Duration,
    ) -> Self {
        Self {
            engine,
            cache,
            store,
            metrics,
            cache_ttl,
            engine_timeout,
        }
    }

    pub fn metrics(&self) -> &Arc<MetricsTracker> {
        &self.metrics
    }

    /// Classify one text input through the cache-aside path
    pub async fn analyze(&self, text: &str) -> ClassifierResult<Analysis> {
        let start = Instant::now();
        let key = normalize_key(text);

        // CacheLookup: a cache fault is a forced miss, never an error
        match self.cache.get(&key).await {
            Ok(Some(result)) => {
                logger::debug(LogTag::Orchestrator, &format!("Cache hit for '{}'", key));
                self.metrics.record_request(start.elapsed(), true);
                return Ok(Analysis {
                    result,
                    cached: true,
                });
            }
            Ok(None) => {}
            Err(e) => {
                logger::warning(
                    LogTag::Cache,
                    &format!("Cache lookup failed, treating as miss: {}", e),
                );
            }
        }

        // CacheMiss: exactly one engine call, no internal retry
        let result = match self.classify_with_timeout(text).await {
            Ok(result) => result,
            Err(e) => {
                logger::error(LogTag::Engine, &format!("Inference failed: {}", e));
                // A failed inference is still a measurable request
                self.metrics.record_request(start.elapsed(), false);
                return Err(e);
            }
        };

        // Persist: best-effort write-through, neither failure reaches the caller
        if let Err(e) = self.cache.set(&key, &result, self.cache_ttl).await {
            logger::warning(LogTag::Cache, &format!("Cache write failed: {}", e));
        }

        let record = ResultRecord {
            text: text.to_string(),
            label: result.label.clone(),
            score: result.score,
            recorded_at: Utc::now(),
        };
        if let Err(e) = self.store.append(&record).await {
            logger::warning(
                LogTag::Store,
                &format!("Result append failed (audit trail incomplete): {}", e),
            );
        }

        self.metrics.record_request(start.elapsed(), false);
        Ok(Analysis {
            result,
            cached: false,
        })
    }

    async fn classify_with_timeout(&self, text: &str) -> ClassifierResult<Classification> {
        match tokio::time::timeout(self.engine_timeout, self.engine.classify(text)).await {
            Ok(result) => result,
            Err(_) => Err(ClassifierError::InferenceFailed(format!(
                "Engine timed out after {}ms",
                self.engine_timeout.as_millis()
            ))),
        }
    }
}

/// Cache key normalization: exact string match modulo surrounding
/// whitespace. No case folding - the engine may score cased input
/// differently, and the key must stay faithful to what was scored.
fn normalize_key(text: &str) -> String {
    text.trim().to_string()
}
