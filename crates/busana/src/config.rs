//! Assistant configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use busana_classifier::ClassifierConfig;
use busana_core::{BusanaError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusanaConfig {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub dialogue: DialogueConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub response: ResponseConfig,
}

impl BusanaConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.classifier.confidence_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(BusanaError::Config(format!(
                "classifier.confidence_threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        if self.classifier.top_k == 0 {
            return Err(BusanaError::Config(
                "classifier.top_k must be at least 1".to_string(),
            ));
        }
        if self.dialogue.max_attempts == 0 {
            return Err(BusanaError::Config(
                "dialogue.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bound on unrecognized clarification answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default)]
    pub on_max_attempts: MaxAttemptsAction,
}

fn default_max_attempts() -> u32 {
    3
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            on_max_attempts: MaxAttemptsAction::default(),
        }
    }
}

/// What to do once `max_attempts` answers in a row were not understood
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxAttemptsAction {
    #[default]
    KeepAsking,
    /// Fill the outstanding slot with its default and continue.
    UseDefaults,
    /// Reset the conversation and apologize.
    GiveUp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Recommendation table to load instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Fixed RNG seed; every session then produces the same replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
