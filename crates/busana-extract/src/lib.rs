//! Keyword-based slot extraction for Indonesian fashion queries

mod extractor;
mod rules;

pub use extractor::ParameterExtractor;
pub use rules::{KeywordRule, KeywordTables, RuleSet};
