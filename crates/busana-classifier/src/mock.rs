use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use busana_core::{ClassificationResult, ClassifierError, IntentClassifier};

/// Scripted classifier for tests
#[derive(Clone)]
pub struct MockClassifier {
    name: String,
    inner: Arc<RwLock<MockClassifierInner>>,
}

struct MockClassifierInner {
    responses: Vec<Vec<ClassificationResult>>,
    response_index: usize,
    cycle_responses: bool,
    call_history: Vec<MockCall>,
    should_error: bool,
    error_message: String,
    latency_ms: u64,
}

#[derive(Debug, Clone)]
pub struct MockCall {
    pub text: String,
    pub top_k: usize,
    pub timestamp: std::time::Instant,
}

impl MockClassifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Arc::new(RwLock::new(MockClassifierInner {
                responses: Vec::new(),
                response_index: 0,
                cycle_responses: false,
                call_history: Vec::new(),
                should_error: false,
                error_message: "Mock error".to_string(),
                latency_ms: 0,
            })),
        }
    }

    /// Always answer with a single prediction.
    pub fn set_prediction(&mut self, category_id: u32, confidence: f32) {
        self.set_responses(
            vec![vec![ClassificationResult::new(category_id, confidence)]],
            false,
        );
    }

    pub fn set_responses(&mut self, responses: Vec<Vec<ClassificationResult>>, cycle: bool) {
        let mut inner = self.inner.write();
        inner.responses = responses;
        inner.response_index = 0;
        inner.cycle_responses = cycle;
    }

    pub fn add_response(&mut self, response: Vec<ClassificationResult>) {
        self.inner.write().responses.push(response);
    }

    pub fn set_error(&mut self, error_message: impl Into<String>) {
        let mut inner = self.inner.write();
        inner.should_error = true;
        inner.error_message = error_message.into();
    }

    pub fn clear_error(&mut self) {
        self.inner.write().should_error = false;
    }

    pub fn set_latency(&mut self, latency_ms: u64) {
        self.inner.write().latency_ms = latency_ms;
    }

    pub fn call_count(&self) -> usize {
        self.inner.read().call_history.len()
    }

    pub fn call_history(&self) -> Vec<MockCall> {
        self.inner.read().call_history.clone()
    }

    pub fn last_call(&self) -> Option<MockCall> {
        self.inner.read().call_history.last().cloned()
    }

    pub fn reset(&mut self) {
        let mut inner = self.inner.write();
        inner.responses.clear();
        inner.response_index = 0;
        inner.cycle_responses = false;
        inner.call_history.clear();
        inner.should_error = false;
        inner.error_message = "Mock error".to_string();
        inner.latency_ms = 0;
    }

    fn next_response(&self) -> Vec<ClassificationResult> {
        let mut inner = self.inner.write();
        if inner.responses.is_empty() {
            return Vec::new();
        }

        let response = inner.responses[inner.response_index].clone();
        if inner.cycle_responses {
            inner.response_index = (inner.response_index + 1) % inner.responses.len();
        } else if inner.response_index < inner.responses.len() - 1 {
            inner.response_index += 1;
        }
        response
    }

    fn record_call(&self, text: &str, top_k: usize) {
        self.inner.write().call_history.push(MockCall {
            text: text.to_string(),
            top_k,
            timestamp: std::time::Instant::now(),
        });
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new("mock")
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn classify(
        &self,
        text: &str,
        top_k: usize,
    ) -> Result<Vec<ClassificationResult>, ClassifierError> {
        self.record_call(text, top_k);

        let latency_ms = self.inner.read().latency_ms;
        if latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(latency_ms)).await;
        }

        let should_error = self.inner.read().should_error;
        if should_error {
            let error_message = self.inner.read().error_message.clone();
            return Err(ClassifierError::Other(error_message));
        }

        Ok(self.next_response())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_scripted_responses_advance_then_stick() {
        let mut mock = MockClassifier::default();
        mock.set_responses(
            vec![
                vec![ClassificationResult::new(9, 0.9)],
                vec![ClassificationResult::new(15, 0.8)],
            ],
            false,
        );

        assert_eq!(mock.classify("a", 2).await.unwrap()[0].category_id, 9);
        assert_eq!(mock.classify("b", 2).await.unwrap()[0].category_id, 15);
        assert_eq!(mock.classify("c", 2).await.unwrap()[0].category_id, 15);
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.last_call().unwrap().text, "c");
    }

    #[tokio::test]
    async fn test_injected_error() {
        let mut mock = MockClassifier::default();
        mock.set_error("service down");
        let err = mock.classify("baju", 2).await.unwrap_err();
        assert!(err.to_string().contains("service down"));

        mock.clear_error();
        assert!(mock.classify("baju", 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_added_responses_history_and_reset() {
        let mut mock = MockClassifier::new("scripted");
        mock.add_response(vec![ClassificationResult::new(8, 0.7)]);
        mock.add_response(vec![ClassificationResult::new(16, 0.6)]);

        assert_eq!(mock.classify("kondangan", 2).await.unwrap()[0].category_id, 8);
        assert_eq!(mock.classify("musim dingin", 1).await.unwrap()[0].category_id, 16);

        let history = mock.call_history();
        let texts: Vec<&str> = history.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["kondangan", "musim dingin"]);
        assert_eq!(history[1].top_k, 1);
        assert!(history[0].timestamp <= history[1].timestamp);

        mock.set_error("service down");
        mock.reset();
        assert_eq!(mock.call_count(), 0);
        assert!(mock.classify("baju", 2).await.unwrap().is_empty());
        assert_eq!(mock.name(), "scripted");
    }

    #[tokio::test]
    async fn test_latency_delays_answer() {
        let mut mock = MockClassifier::default();
        mock.set_prediction(9, 0.9);
        mock.set_latency(500);

        let slow =
            tokio::time::timeout(Duration::from_millis(20), mock.classify("baju pesta", 2)).await;
        assert!(slow.is_err());

        mock.set_latency(0);
        let fast =
            tokio::time::timeout(Duration::from_millis(500), mock.classify("baju pesta", 2)).await;
        assert_eq!(fast.unwrap().unwrap()[0].category_id, 9);
        assert_eq!(mock.call_count(), 2);
    }
}
