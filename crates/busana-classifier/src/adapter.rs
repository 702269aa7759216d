use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use busana_core::{ClassificationResult, IntentCategory, IntentClassifier, Result, SlotSet};
use busana_extract::KeywordTables;

use crate::config::ClassifierConfig;
use crate::fallback::KeywordFallback;
use crate::http::HttpClassifier;

/// Where a category decision came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    /// The classifier's top prediction cleared the threshold.
    Classifier,
    /// Confidence was below the threshold, or no classifier is configured.
    KeywordFallback,
    /// The classifier failed or answered with nothing usable.
    ClassifierFailure,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentDecision {
    pub category: IntentCategory,
    /// Top confidence reported by the classifier, if it answered.
    pub confidence: Option<f32>,
    pub source: DecisionSource,
}

impl IntentDecision {
    /// Slot values this decision may contribute to a fresh query.
    ///
    /// Only a confident classifier answer may fill gender, skin tone or
    /// occasion. A keyword fallback contributes weather and season at most.
    pub fn seed_slots(&self) -> SlotSet {
        match self.source {
            DecisionSource::Classifier => self.category.seed_slots(),
            DecisionSource::KeywordFallback => self.category.seed_slots().optional_only(),
            DecisionSource::ClassifierFailure => SlotSet::new(),
        }
    }
}

/// Turns classifier predictions into one intent category.
pub struct ClassifierAdapter {
    classifier: Option<Arc<dyn IntentClassifier>>,
    fallback: KeywordFallback,
    config: ClassifierConfig,
}

impl ClassifierAdapter {
    pub fn new(config: ClassifierConfig, tables: Arc<KeywordTables>) -> Self {
        Self {
            classifier: None,
            fallback: KeywordFallback::new(tables),
            config,
        }
    }

    /// Build the adapter, connecting to `config.endpoint` when one is set.
    pub fn from_config(config: ClassifierConfig, tables: Arc<KeywordTables>) -> Result<Self> {
        let classifier: Option<Arc<dyn IntentClassifier>> = match &config.endpoint {
            Some(endpoint) => Some(Arc::new(HttpClassifier::new(
                endpoint.clone(),
                Duration::from_millis(config.timeout_ms),
            )?)),
            None => None,
        };
        Ok(Self {
            classifier,
            ..Self::new(config, tables)
        })
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    pub async fn classify(&self, text: &str) -> IntentCategory {
        self.classify_detailed(text).await.category
    }

    pub async fn classify_detailed(&self, text: &str) -> IntentDecision {
        let Some(classifier) = &self.classifier else {
            return IntentDecision {
                category: self.fallback.classify(text),
                confidence: None,
                source: DecisionSource::KeywordFallback,
            };
        };

        let predictions = match classifier.classify(text, self.config.top_k).await {
            Ok(predictions) => predictions,
            Err(e) => {
                warn!(classifier = classifier.name(), error = %e, "Classifier call failed");
                return Self::failure(None);
            }
        };

        let Some(top) = Self::top_prediction(&predictions, self.config.top_k) else {
            warn!(classifier = classifier.name(), "Classifier returned no predictions");
            return Self::failure(None);
        };

        let Some(category) = top.category() else {
            warn!(
                classifier = classifier.name(),
                category_id = top.category_id,
                "Classifier returned unknown category id"
            );
            return Self::failure(Some(top.confidence));
        };

        if top.confidence < self.config.confidence_threshold {
            let fallback = self.fallback.classify(text);
            debug!(
                predicted = %category,
                confidence = top.confidence,
                threshold = self.config.confidence_threshold,
                fallback = %fallback,
                "Low confidence, using keyword fallback"
            );
            return IntentDecision {
                category: fallback,
                confidence: Some(top.confidence),
                source: DecisionSource::KeywordFallback,
            };
        }

        debug!(category = %category, confidence = top.confidence, "Intent classified");
        IntentDecision {
            category,
            confidence: Some(top.confidence),
            source: DecisionSource::Classifier,
        }
    }

    /// Highest-confidence prediction among the first `top_k`.
    fn top_prediction(
        predictions: &[ClassificationResult],
        top_k: usize,
    ) -> Option<ClassificationResult> {
        predictions
            .iter()
            .take(top_k.max(1))
            .copied()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    fn failure(confidence: Option<f32>) -> IntentDecision {
        IntentDecision {
            category: IntentCategory::Other,
            confidence,
            source: DecisionSource::ClassifierFailure,
        }
    }
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("classifier", &self.classifier.as_ref().map(|c| c.name()))
            .field("config", &self.config)
            .finish()
    }
}
