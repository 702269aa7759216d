//! Error types shared across the workspace

use thiserror::Error;

use crate::traits::classifier::ClassifierError;

pub type Result<T> = std::result::Result<T, BusanaError>;

#[derive(Debug, Error)]
pub enum BusanaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for BusanaError {
    fn from(err: serde_json::Error) -> Self {
        BusanaError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BusanaError {
    fn from(err: serde_yaml::Error) -> Self {
        BusanaError::Serialization(err.to_string())
    }
}
