//! Core types and traits for the Busana fashion assistant

pub mod error;
pub mod intent;
pub mod slots;
pub mod traits;

pub use error::{BusanaError, Result};
pub use intent::{ClassificationResult, IntentCategory};
pub use slots::{Gender, Occasion, Season, SkinTone, Slot, SlotSet, Weather};
pub use traits::classifier::{ClassifierError, IntentClassifier};
