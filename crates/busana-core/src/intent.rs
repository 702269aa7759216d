//! Intent categories produced by the external classifier

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::slots::{Gender, Occasion, Season, SkinTone, SlotSet, Weather};

/// Label set of the fine-tuned classifier. Discriminants are the model's class ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    FormalPriaLight = 0,
    FormalWanitaLight = 1,
    FormalPriaDark = 2,
    FormalWanitaDark = 3,
    KasualPriaLight = 4,
    KasualWanitaLight = 5,
    KasualPriaDark = 6,
    KasualWanitaDark = 7,
    Wedding = 8,
    Party = 9,
    BusinessMeeting = 10,
    HotWeather = 11,
    ColdWeather = 12,
    RainyWeather = 13,
    WindyWeather = 14,
    Summer = 15,
    Winter = 16,
    Spring = 17,
    Autumn = 18,
    Other = 19,
}

impl IntentCategory {
    pub const ALL: [IntentCategory; 20] = [
        Self::FormalPriaLight,
        Self::FormalWanitaLight,
        Self::FormalPriaDark,
        Self::FormalWanitaDark,
        Self::KasualPriaLight,
        Self::KasualWanitaLight,
        Self::KasualPriaDark,
        Self::KasualWanitaDark,
        Self::Wedding,
        Self::Party,
        Self::BusinessMeeting,
        Self::HotWeather,
        Self::ColdWeather,
        Self::RainyWeather,
        Self::WindyWeather,
        Self::Summer,
        Self::Winter,
        Self::Spring,
        Self::Autumn,
        Self::Other,
    ];

    pub fn id(&self) -> u32 {
        *self as u32
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FormalPriaLight => "formal_pria_light",
            Self::FormalWanitaLight => "formal_wanita_light",
            Self::FormalPriaDark => "formal_pria_dark",
            Self::FormalWanitaDark => "formal_wanita_dark",
            Self::KasualPriaLight => "kasual_pria_light",
            Self::KasualWanitaLight => "kasual_wanita_light",
            Self::KasualPriaDark => "kasual_pria_dark",
            Self::KasualWanitaDark => "kasual_wanita_dark",
            Self::Wedding => "wedding",
            Self::Party => "party",
            Self::BusinessMeeting => "business_meeting",
            Self::HotWeather => "hot_weather",
            Self::ColdWeather => "cold_weather",
            Self::RainyWeather => "rainy_weather",
            Self::WindyWeather => "windy_weather",
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Autumn => "autumn",
            Self::Other => "other",
        }
    }

    /// Slot values implied by the category alone.
    pub fn seed_slots(&self) -> SlotSet {
        let styled = |occasion, gender, skin_tone| {
            SlotSet::new()
                .with_occasion(occasion)
                .with_gender(gender)
                .with_skin_tone(skin_tone)
        };

        match self {
            Self::FormalPriaLight => styled(Occasion::Formal, Gender::Pria, SkinTone::Light),
            Self::FormalWanitaLight => styled(Occasion::Formal, Gender::Wanita, SkinTone::Light),
            Self::FormalPriaDark => styled(Occasion::Formal, Gender::Pria, SkinTone::Dark),
            Self::FormalWanitaDark => styled(Occasion::Formal, Gender::Wanita, SkinTone::Dark),
            Self::KasualPriaLight => styled(Occasion::Casual, Gender::Pria, SkinTone::Light),
            Self::KasualWanitaLight => styled(Occasion::Casual, Gender::Wanita, SkinTone::Light),
            Self::KasualPriaDark => styled(Occasion::Casual, Gender::Pria, SkinTone::Dark),
            Self::KasualWanitaDark => styled(Occasion::Casual, Gender::Wanita, SkinTone::Dark),
            Self::Wedding => SlotSet::new().with_occasion(Occasion::Wedding),
            Self::Party => SlotSet::new().with_occasion(Occasion::Party),
            Self::BusinessMeeting => SlotSet::new().with_occasion(Occasion::BusinessMeeting),
            Self::HotWeather => SlotSet::new().with_weather(Weather::Hot),
            Self::ColdWeather => SlotSet::new().with_weather(Weather::Cold),
            Self::RainyWeather => SlotSet::new().with_weather(Weather::Rainy),
            Self::WindyWeather => SlotSet::new().with_weather(Weather::Windy),
            Self::Summer => SlotSet::new().with_season(Season::Summer),
            Self::Winter => SlotSet::new().with_season(Season::Winter),
            Self::Spring => SlotSet::new().with_season(Season::Spring),
            Self::Autumn => SlotSet::new().with_season(Season::Autumn),
            Self::Other => SlotSet::new(),
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scored prediction returned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category_id: u32,
    pub confidence: f32,
}

impl ClassificationResult {
    pub fn new(category_id: u32, confidence: f32) -> Self {
        Self {
            category_id,
            confidence,
        }
    }

    pub fn category(&self) -> Option<IntentCategory> {
        IntentCategory::from_id(self.category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_table() {
        for (idx, category) in IntentCategory::ALL.iter().enumerate() {
            assert_eq!(category.id() as usize, idx);
            assert_eq!(IntentCategory::from_id(idx as u32), Some(*category));
        }
        assert_eq!(IntentCategory::from_id(20), None);
    }

    #[test]
    fn test_seed_slots_for_styled_category() {
        let seed = IntentCategory::FormalWanitaDark.seed_slots();
        assert_eq!(seed.occasion, Some(Occasion::Formal));
        assert_eq!(seed.gender, Some(Gender::Wanita));
        assert_eq!(seed.skin_tone, Some(SkinTone::Dark));
        assert!(seed.weather.is_none());
    }

    #[test]
    fn test_seed_slots_for_enrichment_categories() {
        assert_eq!(
            IntentCategory::HotWeather.seed_slots().weather,
            Some(Weather::Hot)
        );
        assert_eq!(
            IntentCategory::Summer.seed_slots().season,
            Some(Season::Summer)
        );
        assert!(IntentCategory::Other.seed_slots().is_empty());
    }

    #[test]
    fn test_unknown_category_id() {
        let result = ClassificationResult::new(42, 0.9);
        assert!(result.category().is_none());
    }
}
