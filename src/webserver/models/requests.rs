/// API request type definitions
use serde::{Deserialize, Serialize};

/// Body of POST /analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}
