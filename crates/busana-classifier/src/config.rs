//! Classifier adapter configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// URL of the HTTP classifier. Without one only the keyword fallback runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    #[serde(default = "default_top_k")]
    pub top_k: usize,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Fill unspecified slots from the slot values a confident category implies.
    #[serde(default = "default_seed_from_intent")]
    pub seed_from_intent: bool,
}

fn default_confidence_threshold() -> f32 {
    0.5
}

fn default_top_k() -> usize {
    2
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_seed_from_intent() -> bool {
    false
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            confidence_threshold: default_confidence_threshold(),
            top_k: default_top_k(),
            timeout_ms: default_timeout_ms(),
            seed_from_intent: default_seed_from_intent(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_seed_from_intent(mut self, enabled: bool) -> Self {
        self.seed_from_intent = enabled;
        self
    }
}
