/// Scoring engine seam
///
/// The model is an external collaborator: text in, label + score out.
/// The orchestrator only sees this trait, so any backend (in-process
/// lexicon, remote model server, test fake) plugs in at construction.
use crate::errors::ClassifierResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod lexicon;

pub use lexicon::LexiconEngine;

/// A single classification result: label plus confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Text classification backend
///
/// May suspend for the duration of model inference. Stateless from the
/// orchestrator's perspective; retry policy (if any) lives behind this
/// trait, never in the orchestrator.
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    async fn classify(&self, text: &str) -> ClassifierResult<Classification>;
}
