use std::sync::Arc;
use tracing::debug;

use busana_core::{Gender, Occasion, SkinTone, Slot, SlotSet};

use crate::table::{Outfit, RecommendationTable, SeasonAdvice, TableKey, WeatherAdvice};

/// Occasion used when the requested one is unspecified or absent from the table.
pub const DEFAULT_OCCASION: Occasion = Occasion::Casual;
/// Skin tone used when the requested one has no entry under the occasion.
pub const DEFAULT_SKIN_TONE: SkinTone = SkinTone::Light;

/// Resolved candidates for one recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRecord {
    pub outfit: Outfit,
    /// Table cell actually used; `None` when the generic outfit was synthesized.
    pub key: Option<TableKey>,
    /// Slots whose requested value was replaced by a default.
    pub defaulted: Vec<Slot>,
    pub weather: Option<WeatherAdvice>,
    pub season: Option<SeasonAdvice>,
}

impl RecommendationRecord {
    pub fn is_generic(&self) -> bool {
        self.key.is_none()
    }

    pub fn used_default(&self) -> bool {
        !self.defaulted.is_empty() || self.is_generic()
    }
}

/// Maps a slot set to table entries, substituting defaults level by level.
#[derive(Debug, Clone)]
pub struct RecommendationMapper {
    table: Arc<RecommendationTable>,
}

impl RecommendationMapper {
    pub fn new(table: Arc<RecommendationTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RecommendationTable {
        &self.table
    }

    /// Never fails: unreachable cells fall back to the generic outfit.
    pub fn recommend(&self, slots: &SlotSet) -> RecommendationRecord {
        let mut defaulted = Vec::new();
        let (outfit, key) = match self.resolve_key(slots, &mut defaulted) {
            Some((key, outfit)) => (outfit.clone(), Some(key)),
            None => (Outfit::generic(), None),
        };

        let weather = slots
            .weather
            .and_then(|w| self.table.weather(w))
            .cloned();
        let season = slots.season.and_then(|s| self.table.season(s)).cloned();

        debug!(
            requested = ?slots,
            used = ?key,
            defaulted = ?defaulted,
            generic = key.is_none(),
            weather = weather.is_some(),
            season = season.is_some(),
            "Recommendation resolved"
        );

        RecommendationRecord {
            outfit,
            key,
            defaulted,
            weather,
            season,
        }
    }

    fn resolve_key(
        &self,
        slots: &SlotSet,
        defaulted: &mut Vec<Slot>,
    ) -> Option<(TableKey, &Outfit)> {
        let occasion = match slots.occasion {
            Some(o) if self.table.has_occasion(o) => o,
            _ => {
                defaulted.push(Slot::Occasion);
                DEFAULT_OCCASION
            }
        };

        let skin_tone = match slots.skin_tone {
            Some(s) if self.table.has_skin_tone(occasion, s) => s,
            _ => {
                defaulted.push(Slot::SkinTone);
                DEFAULT_SKIN_TONE
            }
        };

        if let Some(gender) = slots.gender {
            if let Some(outfit) = self.table.get(occasion, skin_tone, gender) {
                return Some(((occasion, skin_tone, gender), outfit));
            }
        }

        defaulted.push(Slot::Gender);
        Gender::ALL.into_iter().find_map(|gender| {
            self.table
                .get(occasion, skin_tone, gender)
                .map(|outfit| ((occasion, skin_tone, gender), outfit))
        })
    }
}
