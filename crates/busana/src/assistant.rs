use std::path::Path;
use std::sync::Arc;
use tracing::info;

use busana_catalog::{RecommendationMapper, RecommendationTable};
use busana_classifier::ClassifierAdapter;
use busana_core::{IntentClassifier, Result};
use busana_dialogue::ClarificationMachine;
use busana_extract::{KeywordTables, ParameterExtractor};
use busana_response::ResponseAssembler;

use crate::config::BusanaConfig;
use crate::session::Session;

/// Shared, read-only components used by every session.
pub(crate) struct Components {
    pub config: BusanaConfig,
    pub classifier: ClassifierAdapter,
    pub machine: ClarificationMachine,
    pub mapper: RecommendationMapper,
    pub assembler: ResponseAssembler,
}

/// Entry point: owns the immutable components and hands out sessions.
#[derive(Clone)]
pub struct FashionAssistant {
    components: Arc<Components>,
}

impl FashionAssistant {
    pub fn builder() -> AssistantBuilder {
        AssistantBuilder::new()
    }

    /// Assistant with the default configuration and built-in tables.
    pub fn new() -> Result<Self> {
        AssistantBuilder::new().build()
    }

    pub fn config(&self) -> &BusanaConfig {
        &self.components.config
    }

    pub fn has_classifier(&self) -> bool {
        self.components.classifier.has_classifier()
    }

    /// Start a new conversation with its own context and RNG.
    pub fn session(&self) -> Session {
        Session::new(Arc::clone(&self.components))
    }
}

impl std::fmt::Debug for FashionAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FashionAssistant")
            .field("config", &self.components.config)
            .field("classifier", &self.components.classifier)
            .finish()
    }
}

pub struct AssistantBuilder {
    config: BusanaConfig,
    classifier: Option<Arc<dyn IntentClassifier>>,
    table: Option<RecommendationTable>,
    keywords: Option<KeywordTables>,
}

impl AssistantBuilder {
    pub fn new() -> Self {
        Self {
            config: BusanaConfig::default(),
            classifier: None,
            table: None,
            keywords: None,
        }
    }

    pub fn from_config(config: BusanaConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    pub fn from_yaml(yaml_content: &str) -> Result<Self> {
        Ok(Self::from_config(BusanaConfig::from_yaml_str(yaml_content)?))
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_config(BusanaConfig::from_file(path)?))
    }

    pub fn config(mut self, config: BusanaConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this classifier instead of the one named by `classifier.endpoint`.
    pub fn classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Use this table instead of loading `catalog.path` or the built-in one.
    pub fn table(mut self, table: RecommendationTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn keywords(mut self, keywords: KeywordTables) -> Self {
        self.keywords = Some(keywords);
        self
    }

    pub fn build(self) -> Result<FashionAssistant> {
        self.config.validate()?;

        let keywords = Arc::new(self.keywords.unwrap_or_else(KeywordTables::builtin));

        let table = match self.table {
            Some(table) => table,
            None => match &self.config.catalog.path {
                Some(path) => RecommendationTable::from_file(path)?,
                None => RecommendationTable::builtin()?,
            },
        };

        let classifier = match self.classifier {
            Some(classifier) => {
                ClassifierAdapter::new(self.config.classifier.clone(), Arc::clone(&keywords))
                    .with_classifier(classifier)
            }
            None => {
                ClassifierAdapter::from_config(self.config.classifier.clone(), Arc::clone(&keywords))?
            }
        };

        let extractor = Arc::new(ParameterExtractor::new(keywords));

        info!(
            classifier = classifier.has_classifier(),
            outfits = table.len(),
            max_attempts = self.config.dialogue.max_attempts,
            on_max_attempts = ?self.config.dialogue.on_max_attempts,
            "Fashion assistant ready"
        );

        Ok(FashionAssistant {
            components: Arc::new(Components {
                config: self.config,
                classifier,
                machine: ClarificationMachine::new(extractor),
                mapper: RecommendationMapper::new(Arc::new(table)),
                assembler: ResponseAssembler::new(),
            }),
        })
    }
}

impl Default for AssistantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busana_core::BusanaError;
    use std::io::Write;

    #[test]
    fn test_default_assistant_has_no_classifier() {
        let assistant = FashionAssistant::new().unwrap();
        assert!(!assistant.has_classifier());
    }

    #[test]
    fn test_endpoint_builds_http_classifier() {
        let assistant =
            AssistantBuilder::from_yaml("classifier:\n  endpoint: http://localhost:8000/classify\n")
                .unwrap()
                .build()
                .unwrap();
        assert!(assistant.has_classifier());
    }

    #[test]
    fn test_catalog_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "occasions:\n  casual:\n    light:\n      pria:\n        tops: [kaos]\n        bottoms: [jeans]\n        shoes: [sneakers]\n        accessories: [topi]\n        colors_best: [biru]\n        tips: Santai.\n"
        )
        .unwrap();

        let mut config = BusanaConfig::default();
        config.catalog.path = Some(file.path().to_path_buf());
        assert!(AssistantBuilder::from_config(config).build().is_ok());

        let mut config = BusanaConfig::default();
        config.catalog.path = Some("/nonexistent/busana.yaml".into());
        let err = AssistantBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, BusanaError::Io(_)));
    }
}
