use std::sync::Arc;
use tracing::debug;

use busana_core::{Occasion, Slot, SlotSet};

use super::rules::KeywordTables;

/// Resolves slot values from free text with the prioritized keyword tables.
///
/// Stateless: the same text always yields the same slots.
#[derive(Debug, Clone)]
pub struct ParameterExtractor {
    tables: Arc<KeywordTables>,
}

impl ParameterExtractor {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    /// Extract every slot that has a matching keyword.
    pub fn extract(&self, text: &str) -> SlotSet {
        let lowered = text.to_lowercase();
        let slots = SlotSet {
            gender: self.tables.gender.first_match(&lowered).map(|r| r.value),
            skin_tone: self.tables.skin_tone.first_match(&lowered).map(|r| r.value),
            occasion: self.resolve_occasion(&lowered),
            weather: self.tables.weather.first_match(&lowered).map(|r| r.value),
            season: self.tables.season.first_match(&lowered).map(|r| r.value),
        };
        debug!(?slots, "Extracted slots");
        slots
    }

    /// Resolve only `slot` from `text`; every other slot is left unspecified.
    pub fn extract_slot(&self, slot: Slot, text: &str) -> SlotSet {
        let lowered = text.to_lowercase();
        let mut slots = SlotSet::new();
        match slot {
            Slot::Gender => slots.gender = self.tables.gender.first_match(&lowered).map(|r| r.value),
            Slot::SkinTone => {
                slots.skin_tone = self.tables.skin_tone.first_match(&lowered).map(|r| r.value)
            }
            Slot::Occasion => slots.occasion = self.resolve_occasion(&lowered),
            Slot::Weather => {
                slots.weather = self.tables.weather.first_match(&lowered).map(|r| r.value)
            }
            Slot::Season => slots.season = self.tables.season.first_match(&lowered).map(|r| r.value),
        }
        slots
    }

    fn resolve_occasion(&self, lowered: &str) -> Option<Occasion> {
        if self.tables.mentions_interview(lowered) {
            return Some(Occasion::Interview);
        }
        self.tables.occasion.first_match(lowered).map(|rule| {
            debug!(pattern = %rule.pattern, occasion = %rule.value, "Occasion keyword matched");
            rule.value
        })
    }
}

impl Default for ParameterExtractor {
    fn default() -> Self {
        Self::new(Arc::new(KeywordTables::builtin()))
    }
}
