//! Recommendation data and lookup for the Busana assistant

mod mapper;
mod table;

pub use mapper::{DEFAULT_OCCASION, DEFAULT_SKIN_TONE, RecommendationMapper, RecommendationRecord};
pub use table::{Outfit, RecommendationTable, SeasonAdvice, TableKey, WeatherAdvice};
