//! Prioritized keyword rules
//!
//! Every slot is resolved by an ordered list of `(pattern, value)` rules.
//! Patterns are matched as lowercase substrings and the first rule that
//! matches wins, so a phrase that contains a shorter keyword must be listed
//! before it (`"sawo matang muda"` before `"sawo matang"`).

use busana_core::{Gender, Occasion, Season, SkinTone, Weather};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub pattern: String,
    pub value: T,
}

impl<T> KeywordRule<T> {
    pub fn new(pattern: impl Into<String>, value: T) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
            value,
        }
    }
}

/// Ordered rule list for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T: Copy> RuleSet<T> {
    pub fn new(rules: Vec<KeywordRule<T>>) -> Self {
        Self { rules }
    }

    pub fn from_pairs(pairs: &[(&str, T)]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(pattern, value)| KeywordRule::new(*pattern, *value))
                .collect(),
        )
    }

    /// First rule whose pattern occurs in `lowered`. Input must already be lowercase.
    pub fn first_match(&self, lowered: &str) -> Option<&KeywordRule<T>> {
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.pattern.as_str()))
    }

    /// Like [`first_match`](Self::first_match) but only over rules whose value passes `keep`.
    pub fn first_match_where<F>(&self, lowered: &str, keep: F) -> Option<&KeywordRule<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.rules
            .iter()
            .filter(|rule| keep(&rule.value))
            .find(|rule| lowered.contains(rule.pattern.as_str()))
    }

    pub fn matches_any(&self, lowered: &str) -> bool {
        self.first_match(lowered).is_some()
    }

    pub fn rules(&self) -> &[KeywordRule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// All keyword tables used by extraction and by the classifier fallback
#[derive(Debug, Clone)]
pub struct KeywordTables {
    pub gender: RuleSet<Gender>,
    pub skin_tone: RuleSet<SkinTone>,
    pub occasion: RuleSet<Occasion>,
    /// Patterns that force `Occasion::Interview` regardless of `occasion` rules.
    pub interview: Vec<String>,
    pub weather: RuleSet<Weather>,
    pub season: RuleSet<Season>,
}

impl KeywordTables {
    pub fn builtin() -> Self {
        Self {
            gender: builtin_gender(),
            skin_tone: builtin_skin_tone(),
            occasion: builtin_occasion(),
            interview: vec!["interview".to_string(), "wawancara".to_string()],
            weather: builtin_weather(),
            season: builtin_season(),
        }
    }

    pub fn mentions_interview(&self, lowered: &str) -> bool {
        self.interview
            .iter()
            .any(|pattern| lowered.contains(pattern.as_str()))
    }
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_gender() -> RuleSet<Gender> {
    RuleSet::from_pairs(&[
        ("pria", Gender::Pria),
        ("laki-laki", Gender::Pria),
        ("cowok", Gender::Pria),
        ("bapak", Gender::Pria),
        ("wanita", Gender::Wanita),
        ("perempuan", Gender::Wanita),
        ("cewek", Gender::Wanita),
        // Short forms also occur inside other words ("emas", "masih"), so they go last.
        ("mbak", Gender::Wanita),
        ("mas", Gender::Pria),
        ("ibu", Gender::Wanita),
    ])
}

fn builtin_skin_tone() -> RuleSet<SkinTone> {
    RuleSet::from_pairs(&[
        ("sangat cerah", SkinTone::VeryLight),
        ("putih pucat", SkinTone::VeryLight),
        ("kulit putih", SkinTone::VeryLight),
        ("sawo matang muda", SkinTone::Medium),
        ("kuning kecoklatan", SkinTone::Medium),
        ("coklat tua", SkinTone::VeryDark),
        ("hitam manis", SkinTone::VeryDark),
        ("kulit gelap", SkinTone::VeryDark),
        ("kuning langsat", SkinTone::Light),
        ("cerah", SkinTone::Light),
        ("putih", SkinTone::Light),
        ("sawo matang", SkinTone::Dark),
        ("coklat", SkinTone::Dark),
        ("gelap", SkinTone::Dark),
        // short enough to occur inside other words, so it goes last
        ("tan", SkinTone::Medium),
    ])
}

fn builtin_occasion() -> RuleSet<Occasion> {
    RuleSet::from_pairs(&[
        ("meeting bisnis", Occasion::BusinessMeeting),
        ("rapat bisnis", Occasion::BusinessMeeting),
        ("business meeting", Occasion::BusinessMeeting),
        ("formal", Occasion::Formal),
        ("resmi", Occasion::Formal),
        ("kerja", Occasion::Formal),
        ("interview", Occasion::Formal),
        ("kantor", Occasion::Formal),
        ("meeting", Occasion::Formal),
        ("santai", Occasion::Casual),
        ("casual", Occasion::Casual),
        ("kasual", Occasion::Casual),
        ("jalan-jalan", Occasion::Casual),
        ("hangout", Occasion::Casual),
        ("main", Occasion::Casual),
        ("pernikahan", Occasion::Wedding),
        ("nikahan", Occasion::Wedding),
        ("kondangan", Occasion::Wedding),
        ("wedding", Occasion::Wedding),
        ("pesta", Occasion::Party),
        ("party", Occasion::Party),
    ])
}

fn builtin_weather() -> RuleSet<Weather> {
    RuleSet::from_pairs(&[
        ("cuaca panas", Weather::Hot),
        ("gerah", Weather::Hot),
        ("musim kemarau", Weather::Hot),
        ("cuaca dingin", Weather::Cold),
        ("sejuk", Weather::Cold),
        ("hujan", Weather::Rainy),
        ("anti air", Weather::Rainy),
        ("berangin", Weather::Windy),
        ("angin kencang", Weather::Windy),
    ])
}

fn builtin_season() -> RuleSet<Season> {
    RuleSet::from_pairs(&[
        ("musim panas", Season::Summer),
        ("summer", Season::Summer),
        ("musim dingin", Season::Winter),
        ("winter", Season::Winter),
        ("musim semi", Season::Spring),
        ("musim bunga", Season::Spring),
        ("spring", Season::Spring),
        ("musim gugur", Season::Autumn),
        ("fall season", Season::Autumn),
        ("autumn", Season::Autumn),
    ])
}
