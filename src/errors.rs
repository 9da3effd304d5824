use thiserror::Error;

/// Error taxonomy for the classification service.
///
/// Only `InferenceFailed` is fatal to a request. Cache and store faults
/// degrade functionality (freshness, audit completeness) without failing
/// the request; the orchestrator absorbs them.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Inference failed: {0}")] InferenceFailed(String),

    #[error("Cache unavailable: {0}")] CacheUnavailable(String),

    #[error("Result store unavailable: {0}")] StoreUnavailable(String),

    #[error("Configuration error: {0}")] Config(String),

    #[error("Database error: {0}")] Database(#[from] rusqlite::Error),
}

impl ClassifierError {
    /// Whether the request can still succeed after this error.
    ///
    /// Cache and store faults are absorbed on the request path; everything
    /// else either fails the request or prevents startup.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClassifierError::CacheUnavailable(_) => true,
            ClassifierError::StoreUnavailable(_) => true,
            _ => false,
        }
    }
}

pub type ClassifierResult<T> = Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_errors_are_recoverable() {
        assert!(ClassifierError::CacheUnavailable("down".to_string()).is_recoverable());
        assert!(ClassifierError::StoreUnavailable("down".to_string()).is_recoverable());
        assert!(!ClassifierError::InferenceFailed("model error".to_string()).is_recoverable());
        assert!(!ClassifierError::Config("bad port".to_string()).is_recoverable());
    }
}
