/// Volatile classification cache
///
/// Key/value store with per-entry TTL expiry, keyed by normalized input
/// text. A miss (absent or expired) is `Ok(None)`, never an error; only
/// transport/connectivity faults error, and the orchestrator degrades
/// those to a forced miss.
use crate::engine::Classification;
use crate::errors::ClassifierResult;
use async_trait::async_trait;
use std::time::Duration;

pub mod config;
pub mod memory;

pub use config::CacheConfig;
pub use memory::MemoryCache;

/// Cache backend seam
///
/// Expiry and eviction policy belong entirely to the implementation; the
/// orchestrator never deletes entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a classification. Expired entries behave as absent.
    async fn get(&self, key: &str) -> ClassifierResult<Option<Classification>>;

    /// Store a classification with absolute expiry now+ttl, overwriting
    /// any existing entry unconditionally (last-writer-wins).
    async fn set(&self, key: &str, value: &Classification, ttl: Duration) -> ClassifierResult<()>;
}
