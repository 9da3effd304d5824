/// Durable classification log
///
/// Append-only audit trail of every computed (not cached) result. Writes
/// are best-effort from the request's point of view: a failed append is
/// logged, never propagated. The core needs no read API; reporting reads
/// the table directly.
use crate::errors::ClassifierResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod sqlite;

pub use sqlite::SqliteStore;

/// One computed classification, immutable once written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRecord {
    pub text: String,
    pub label: String,
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Append-capable persistent store seam
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Write one immutable record. Fails with `StoreUnavailable` on
    /// persistence failure.
    async fn append(&self, record: &ResultRecord) -> ClassifierResult<()>;
}
