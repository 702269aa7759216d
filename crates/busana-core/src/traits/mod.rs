//! Core traits for the Busana assistant

pub mod classifier;

pub use classifier::{ClassifierError, IntentClassifier};
