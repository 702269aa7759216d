use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use busana_core::{ClassificationResult, ClassifierError, IntentClassifier};

/// Client for a classifier served over HTTP.
///
/// POSTs `{"text", "top_k"}` and expects
/// `{"predictions": [{"category_id", "confidence"}, ...]}`.
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    predictions: Vec<ClassificationResult>,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ClassifierError::Config(
                "classifier endpoint is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            name: format!("http:{}", endpoint),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClassifier")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl IntentClassifier for HttpClassifier {
    async fn classify(
        &self,
        text: &str,
        top_k: usize,
    ) -> Result<Vec<ClassificationResult>, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest { text, top_k })
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                message: format!("classifier returned {}: {}", status, body),
                status: Some(status.as_u16()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;
        let parsed: ClassifyResponse = serde_json::from_str(&body)?;

        debug!(
            endpoint = %self.endpoint,
            predictions = parsed.predictions.len(),
            "Classifier responded"
        );

        Ok(parsed.predictions)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_rejected() {
        let err = HttpClassifier::new("  ", Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"predictions": [{"category_id": 4, "confidence": 0.81}, {"category_id": 6, "confidence": 0.1}]}"#;
        let parsed: ClassifyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.predictions.len(), 2);
        assert_eq!(parsed.predictions[0].category_id, 4);

        let parsed: ClassifyResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.predictions.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let classifier =
            HttpClassifier::new("http://127.0.0.1:9/classify", Duration::from_millis(200)).unwrap();
        let err = classifier.classify("baju pesta", 2).await.unwrap_err();
        assert!(matches!(err, ClassifierError::Network(_)));
    }
}
