//! Decision slots resolved by the dialogue

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender the recommendation is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "pria", alias = "male")]
    Pria,
    #[serde(rename = "wanita", alias = "female")]
    Wanita,
}

impl Gender {
    /// Fixed order used whenever "the first available gender" is needed.
    pub const ALL: [Gender; 2] = [Gender::Pria, Gender::Wanita];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pria => "pria",
            Self::Wanita => "wanita",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    VeryLight,
    Light,
    Medium,
    Dark,
    VeryDark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::VeryLight,
        SkinTone::Light,
        SkinTone::Medium,
        SkinTone::Dark,
        SkinTone::VeryDark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLight => "very_light",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
            Self::VeryDark => "very_dark",
        }
    }

    /// Indonesian wording used in reply text
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLight => "sangat cerah",
            Self::Light => "cerah",
            Self::Medium => "sawo matang muda",
            Self::Dark => "sawo matang",
            Self::VeryDark => "gelap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    Formal,
    Casual,
    Interview,
    Wedding,
    Party,
    BusinessMeeting,
}

impl Occasion {
    pub const ALL: [Occasion; 6] = [
        Occasion::Formal,
        Occasion::Casual,
        Occasion::Interview,
        Occasion::Wedding,
        Occasion::Party,
        Occasion::BusinessMeeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Interview => "interview",
            Self::Wedding => "wedding",
            Self::Party => "party",
            Self::BusinessMeeting => "business_meeting",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Formal => "acara formal",
            Self::Casual => "acara santai",
            Self::Interview => "interview kerja",
            Self::Wedding => "pernikahan",
            Self::Party => "pesta",
            Self::BusinessMeeting => "meeting bisnis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Hot,
    Cold,
    Rainy,
    Windy,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Hot, Weather::Cold, Weather::Rainy, Weather::Windy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Rainy => "rainy",
            Self::Windy => "windy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hot => "panas",
            Self::Cold => "dingin",
            Self::Rainy => "hujan",
            Self::Windy => "berangin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Spring => "semi",
            Self::Summer => "panas",
            Self::Autumn => "gugur",
            Self::Winter => "dingin",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Gender, SkinTone, Occasion, Weather, Season);

/// Name of one dimension of the decision vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Gender,
    SkinTone,
    Occasion,
    Weather,
    Season,
}

impl Slot {
    /// Mandatory slots, in the order they are asked for.
    pub const MANDATORY: [Slot; 3] = [Slot::Gender, Slot::SkinTone, Slot::Occasion];

    pub fn is_mandatory(&self) -> bool {
        Self::MANDATORY.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::SkinTone => "skin_tone",
            Self::Occasion => "occasion",
            Self::Weather => "weather",
            Self::Season => "season",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decision vector. `None` means the slot is still unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub skin_tone: Option<SkinTone>,
    #[serde(default)]
    pub occasion: Option<Occasion>,
    #[serde(default)]
    pub weather: Option<Weather>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl SlotSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_skin_tone(mut self, skin_tone: SkinTone) -> Self {
        self.skin_tone = Some(skin_tone);
        self
    }

    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn is_set(&self, slot: Slot) -> bool {
        match slot {
            Slot::Gender => self.gender.is_some(),
            Slot::SkinTone => self.skin_tone.is_some(),
            Slot::Occasion => self.occasion.is_some(),
            Slot::Weather => self.weather.is_some(),
            Slot::Season => self.season.is_some(),
        }
    }

    /// First unresolved mandatory slot in asking order.
    pub fn first_missing(&self) -> Option<Slot> {
        Slot::MANDATORY.into_iter().find(|slot| !self.is_set(*slot))
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy one slot's value from `other`; returns whether a value was present.
    pub fn take_slot(&mut self, other: &SlotSet, slot: Slot) -> bool {
        match slot {
            Slot::Gender => self.gender = other.gender.or(self.gender),
            Slot::SkinTone => self.skin_tone = other.skin_tone.or(self.skin_tone),
            Slot::Occasion => self.occasion = other.occasion.or(self.occasion),
            Slot::Weather => self.weather = other.weather.or(self.weather),
            Slot::Season => self.season = other.season.or(self.season),
        }
        other.is_set(slot)
    }

    /// Copy with the mandatory slots cleared, keeping weather and season.
    pub fn optional_only(&self) -> SlotSet {
        SlotSet {
            weather: self.weather,
            season: self.season,
            ..SlotSet::default()
        }
    }

    /// Fill every unspecified slot from `other`, keeping values already set.
    pub fn fill_missing_from(&mut self, other: &SlotSet) {
        self.gender = self.gender.or(other.gender);
        self.skin_tone = self.skin_tone.or(other.skin_tone);
        self.occasion = self.occasion.or(other.occasion);
        self.weather = self.weather.or(other.weather);
        self.season = self.season.or(other.season);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_missing_follows_priority() {
        let slots = SlotSet::new();
        assert_eq!(slots.first_missing(), Some(Slot::Gender));

        let slots = SlotSet::new().with_gender(Gender::Pria);
        assert_eq!(slots.first_missing(), Some(Slot::SkinTone));

        let slots = SlotSet::new()
            .with_gender(Gender::Pria)
            .with_skin_tone(SkinTone::Dark);
        assert_eq!(slots.first_missing(), Some(Slot::Occasion));

        let slots = slots.with_occasion(Occasion::Casual);
        assert!(slots.is_complete());
    }

    #[test]
    fn test_optional_slots_do_not_block_completion() {
        let slots = SlotSet::new()
            .with_gender(Gender::Wanita)
            .with_skin_tone(SkinTone::Light)
            .with_occasion(Occasion::Formal);
        assert!(slots.is_complete());
        assert!(!slots.is_set(Slot::Weather));
        assert!(!slots.is_set(Slot::Season));
    }

    #[test]
    fn test_fill_missing_keeps_existing_values() {
        let mut slots = SlotSet::new().with_gender(Gender::Wanita);
        let seed = SlotSet::new()
            .with_gender(Gender::Pria)
            .with_season(Season::Summer);
        slots.fill_missing_from(&seed);
        assert_eq!(slots.gender, Some(Gender::Wanita));
        assert_eq!(slots.season, Some(Season::Summer));
    }

    #[test]
    fn test_take_slot_only_touches_named_slot() {
        let mut pending = SlotSet::new();
        let answer = SlotSet::new()
            .with_gender(Gender::Pria)
            .with_occasion(Occasion::Party);
        assert!(pending.take_slot(&answer, Slot::Gender));
        assert_eq!(pending.gender, Some(Gender::Pria));
        assert_eq!(pending.occasion, None);

        assert!(!pending.take_slot(&SlotSet::new(), Slot::SkinTone));
        assert_eq!(pending.skin_tone, None);
    }

    #[test]
    fn test_serialization_uses_wire_names() {
        let slots = SlotSet::new()
            .with_gender(Gender::Pria)
            .with_skin_tone(SkinTone::VeryDark)
            .with_occasion(Occasion::BusinessMeeting);
        let json = serde_json::to_value(slots).unwrap();
        assert_eq!(json["gender"], "pria");
        assert_eq!(json["skin_tone"], "very_dark");
        assert_eq!(json["occasion"], "business_meeting");
        assert!(json["weather"].is_null());
        assert!(json["season"].is_null());
    }

    #[test]
    fn test_optional_only_drops_mandatory_slots() {
        let slots = SlotSet::new()
            .with_gender(Gender::Wanita)
            .with_skin_tone(SkinTone::Light)
            .with_occasion(Occasion::Formal)
            .with_season(Season::Winter);
        let optional = slots.optional_only();
        assert_eq!(optional.first_missing(), Some(Slot::Gender));
        assert_eq!(optional.occasion, None);
        assert_eq!(optional.season, Some(Season::Winter));
    }

    #[test]
    fn test_gender_accepts_english_alias() {
        let gender: Gender = serde_yaml::from_str("female").unwrap();
        assert_eq!(gender, Gender::Wanita);
    }
}
