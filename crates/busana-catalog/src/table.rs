//! Static recommendation table

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

use busana_core::{BusanaError, Gender, Occasion, Result, Season, SkinTone, Weather};

const BUILTIN_TABLE: &str = include_str!("../data/recommendations.yaml");

/// Candidate clothing and color lists for one (occasion, skin tone, gender) cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfit {
    pub tops: Vec<String>,
    pub bottoms: Vec<String>,
    pub shoes: Vec<String>,
    pub accessories: Vec<String>,
    pub colors_best: Vec<String>,
    #[serde(default)]
    pub colors_avoid: Vec<String>,
    pub tips: String,
}

impl Outfit {
    /// Used when no table cell can be reached.
    pub fn generic() -> Self {
        Self {
            tops: vec!["kemeja casual".to_string()],
            bottoms: vec!["celana jeans".to_string()],
            shoes: vec!["sepatu sneakers".to_string()],
            accessories: vec!["jam tangan".to_string()],
            colors_best: vec!["navy blue".to_string()],
            colors_avoid: Vec::new(),
            tips: "Pilih potongan yang pas di badan dan warna netral yang mudah dipadukan."
                .to_string(),
        }
    }

    fn validate(&self, key: &TableKey) -> Result<()> {
        let lists = [
            ("tops", &self.tops),
            ("bottoms", &self.bottoms),
            ("shoes", &self.shoes),
            ("accessories", &self.accessories),
            ("colors_best", &self.colors_best),
        ];
        for (field, list) in lists {
            if list.is_empty() {
                return Err(BusanaError::Catalog(format!(
                    "{}/{}/{}: '{}' must not be empty",
                    key.0, key.1, key.2, field
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAdvice {
    pub materials: Vec<String>,
    pub styles: Vec<String>,
    pub tips: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonAdvice {
    pub colors: Vec<String>,
    pub patterns: Vec<String>,
    pub materials: Vec<String>,
    pub tips: String,
}

pub type TableKey = (Occasion, SkinTone, Gender);

/// On-disk layout: occasion -> skin tone -> gender -> outfit.
#[derive(Debug, Deserialize)]
struct RawTable {
    occasions: BTreeMap<Occasion, BTreeMap<SkinTone, BTreeMap<Gender, Outfit>>>,
    #[serde(default)]
    weather: HashMap<Weather, WeatherAdvice>,
    #[serde(default)]
    seasons: HashMap<Season, SeasonAdvice>,
}

/// Immutable recommendation data keyed by typed slot values.
#[derive(Debug, Clone)]
pub struct RecommendationTable {
    outfits: HashMap<TableKey, Outfit>,
    weather: HashMap<Weather, WeatherAdvice>,
    seasons: HashMap<Season, SeasonAdvice>,
}

impl RecommendationTable {
    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_TABLE)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawTable = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_yaml_str(&content)?;
        info!(path = %path.display(), entries = table.len(), "Loaded recommendation table");
        Ok(table)
    }

    fn from_raw(raw: RawTable) -> Result<Self> {
        let mut outfits = HashMap::new();
        for (occasion, by_skin) in raw.occasions {
            for (skin_tone, by_gender) in by_skin {
                for (gender, outfit) in by_gender {
                    let key = (occasion, skin_tone, gender);
                    outfit.validate(&key)?;
                    outfits.insert(key, outfit);
                }
            }
        }

        if outfits.is_empty() {
            return Err(BusanaError::Catalog(
                "recommendation table has no outfits".to_string(),
            ));
        }

        debug!(
            outfits = outfits.len(),
            weather = raw.weather.len(),
            seasons = raw.seasons.len(),
            "Recommendation table parsed"
        );

        Ok(Self {
            outfits,
            weather: raw.weather,
            seasons: raw.seasons,
        })
    }

    pub fn get(&self, occasion: Occasion, skin_tone: SkinTone, gender: Gender) -> Option<&Outfit> {
        self.outfits.get(&(occasion, skin_tone, gender))
    }

    pub fn has_occasion(&self, occasion: Occasion) -> bool {
        self.outfits.keys().any(|(o, _, _)| *o == occasion)
    }

    pub fn has_skin_tone(&self, occasion: Occasion, skin_tone: SkinTone) -> bool {
        self.outfits
            .keys()
            .any(|(o, s, _)| *o == occasion && *s == skin_tone)
    }

    pub fn weather(&self, weather: Weather) -> Option<&WeatherAdvice> {
        self.weather.get(&weather)
    }

    pub fn season(&self, season: Season) -> Option<&SeasonAdvice> {
        self.seasons.get(&season)
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
