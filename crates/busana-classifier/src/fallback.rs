//! Rule-based category selection used when the classifier is unsure

use std::sync::Arc;
use tracing::debug;

use busana_core::{Gender, IntentCategory, Occasion, Season, Weather};
use busana_extract::KeywordTables;

/// Picks a category from keywords in fixed priority:
/// season, weather, named events, interview, then `other`.
#[derive(Debug, Clone)]
pub struct KeywordFallback {
    tables: Arc<KeywordTables>,
}

impl KeywordFallback {
    pub fn new(tables: Arc<KeywordTables>) -> Self {
        Self { tables }
    }

    pub fn classify(&self, text: &str) -> IntentCategory {
        let lowered = text.to_lowercase();
        let category = self.pick(&lowered);
        debug!(category = %category, "Keyword fallback selected category");
        category
    }

    fn pick(&self, lowered: &str) -> IntentCategory {
        if let Some(rule) = self.tables.season.first_match(lowered) {
            return match rule.value {
                Season::Summer => IntentCategory::Summer,
                Season::Winter => IntentCategory::Winter,
                Season::Spring => IntentCategory::Spring,
                Season::Autumn => IntentCategory::Autumn,
            };
        }

        if let Some(rule) = self.tables.weather.first_match(lowered) {
            return match rule.value {
                Weather::Hot => IntentCategory::HotWeather,
                Weather::Cold => IntentCategory::ColdWeather,
                Weather::Rainy => IntentCategory::RainyWeather,
                Weather::Windy => IntentCategory::WindyWeather,
            };
        }

        let event = self
            .tables
            .occasion
            .first_match_where(lowered, |o| matches!(o, Occasion::Wedding | Occasion::Party));
        if let Some(rule) = event {
            return match rule.value {
                Occasion::Wedding => IntentCategory::Wedding,
                _ => IntentCategory::Party,
            };
        }

        if self.tables.mentions_interview(lowered) {
            let female = self
                .tables
                .gender
                .first_match_where(lowered, |g| *g == Gender::Wanita)
                .is_some();
            return if female {
                IntentCategory::FormalWanitaLight
            } else {
                IntentCategory::FormalPriaLight
            };
        }

        IntentCategory::Other
    }
}

impl Default for KeywordFallback {
    fn default() -> Self {
        Self::new(Arc::new(KeywordTables::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_cases() {
        let fallback = KeywordFallback::default();
        let cases = [
            ("outfit untuk musim panas", 15),
            ("baju untuk musim dingin", 16),
            ("pakaian musim semi", 17),
            ("rekomendasi untuk musim gugur", 18),
            ("baju untuk cuaca panas", 11),
            ("pakaian saat cuaca dingin", 12),
            ("outfit untuk hujan", 13),
            ("baju pesta", 9),
            ("outfit untuk pernikahan", 8),
            ("pakaian untuk interview wanita", 1),
            ("baju untuk wawancara", 0),
            ("query random", 19),
        ];
        for (text, expected) in cases {
            assert_eq!(fallback.classify(text).id(), expected, "{}", text);
        }
    }

    #[test]
    fn test_season_beats_event() {
        let fallback = KeywordFallback::default();
        assert_eq!(
            fallback.classify("baju pesta musim panas"),
            IntentCategory::Summer
        );
    }

    #[test]
    fn test_female_interview_uses_any_female_keyword() {
        let fallback = KeywordFallback::default();
        assert_eq!(
            fallback.classify("Interview kerja untuk mbak"),
            IntentCategory::FormalWanitaLight
        );
        assert_eq!(
            fallback.classify("Interview kerja untuk bapak"),
            IntentCategory::FormalPriaLight
        );
    }
}
