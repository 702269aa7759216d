//! Intent classification for the Busana assistant
//!
//! [`ClassifierAdapter`] wraps any [`busana_core::IntentClassifier`] and
//! falls back to keyword rules when the classifier is unsure, unavailable,
//! or not configured at all.

mod adapter;
mod config;
mod fallback;
mod http;
mod mock;

pub use adapter::{ClassifierAdapter, DecisionSource, IntentDecision};
pub use config::ClassifierConfig;
pub use fallback::KeywordFallback;
pub use http::HttpClassifier;
pub use mock::{MockCall, MockClassifier};
