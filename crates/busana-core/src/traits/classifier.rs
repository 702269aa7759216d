//! Boundary to the external intent classifier

use async_trait::async_trait;
use thiserror::Error;

use crate::intent::ClassificationResult;

/// External text classifier.
///
/// Returns predictions sorted by descending confidence. Implementations may
/// return more or fewer than `top_k` entries; callers only read what they need.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(
        &self,
        text: &str,
        top_k: usize,
    ) -> Result<Vec<ClassificationResult>, ClassifierError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        ClassifierError::Serialization(err.to_string())
    }
}
