use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use busana_catalog::{RecommendationRecord, SeasonAdvice, WeatherAdvice};
use busana_core::{Gender, Occasion, SkinTone, SlotSet};

use crate::payload::{ClothingPick, Response, SeasonPick, StructuredPayload, WeatherPick};

/// How many avoid-colors the advisory sentence names.
const AVOID_COLORS_SHOWN: usize = 2;

/// Turns a recommendation record into reply text plus payload.
///
/// Every random pick is made once and shared by the text and the payload.
#[derive(Debug, Clone, Default)]
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble<R: Rng + ?Sized>(
        &self,
        record: &RecommendationRecord,
        slots: &SlotSet,
        rng: &mut R,
    ) -> Response {
        let outfit = &record.outfit;
        let clothing = ClothingPick {
            top: pick(&outfit.tops, rng),
            bottom: pick(&outfit.bottoms, rng),
            shoes: pick(&outfit.shoes, rng),
            accessory: pick(&outfit.accessories, rng),
            color_main: pick(&outfit.colors_best, rng),
        };
        let weather = record
            .weather
            .as_ref()
            .and_then(|advice| pick_weather(advice, rng));
        let season = record
            .season
            .as_ref()
            .and_then(|advice| pick_season(advice, rng));

        let gender = slots.gender.or(record.key.map(|k| k.2));
        let skin_tone = slots.skin_tone.or(record.key.map(|k| k.1));
        let occasion = slots.occasion.or(record.key.map(|k| k.0));

        let mut sentences = vec![format!(
            "{}, saya merekomendasikan {} dipadukan dengan {} dan {}. Warna {} sangat cocok untuk Anda.",
            intro(gender, skin_tone, occasion),
            clothing.top,
            clothing.bottom,
            clothing.shoes,
            clothing.color_main
        )];

        if !outfit.colors_avoid.is_empty() {
            let avoid: Vec<&str> = outfit
                .colors_avoid
                .iter()
                .take(AVOID_COLORS_SHOWN)
                .map(String::as_str)
                .collect();
            sentences.push(format!("Sebaiknya hindari warna {}.", avoid.join(", ")));
        }

        sentences.push(format!("Lengkapi dengan {}.", clothing.accessory));
        sentences.push(outfit.tips.clone());

        if let (Some(chosen), Some(advice), Some(condition)) =
            (&weather, &record.weather, slots.weather)
        {
            sentences.push(format!(
                "Karena cuaca {}, pilih bahan {} dengan gaya {}.",
                condition.label(),
                chosen.material,
                chosen.style
            ));
            sentences.push(advice.tips.clone());
        }

        if let (Some(chosen), Some(advice), Some(period)) =
            (&season, &record.season, slots.season)
        {
            sentences.push(format!(
                "Untuk musim {}, coba warna {} dengan motif {} berbahan {}.",
                period.label(),
                chosen.color,
                chosen.pattern,
                chosen.material
            ));
            sentences.push(advice.tips.clone());
        }

        sentences.retain(|sentence| !sentence.is_empty());
        let text = sentences.join(" ");

        debug!(
            top = %clothing.top,
            color = %clothing.color_main,
            weather = weather.is_some(),
            season = season.is_some(),
            "Response assembled"
        );

        Response {
            text,
            structured_payload: StructuredPayload {
                parameters: *slots,
                clothing,
                weather,
                season,
            },
        }
    }
}

fn intro(gender: Option<Gender>, skin_tone: Option<SkinTone>, occasion: Option<Occasion>) -> String {
    let mut intro = format!("Untuk {}", gender.map(|g| g.label()).unwrap_or("Anda"));
    if let Some(skin_tone) = skin_tone {
        intro.push_str(" dengan kulit ");
        intro.push_str(skin_tone.label());
    }
    if let Some(occasion) = occasion {
        intro.push_str(" yang akan menghadiri ");
        intro.push_str(occasion.label());
    }
    intro
}

fn pick<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> String {
    items.choose(rng).cloned().unwrap_or_default()
}

fn pick_weather<R: Rng + ?Sized>(advice: &WeatherAdvice, rng: &mut R) -> Option<WeatherPick> {
    Some(WeatherPick {
        material: advice.materials.choose(rng)?.clone(),
        style: advice.styles.choose(rng)?.clone(),
    })
}

fn pick_season<R: Rng + ?Sized>(advice: &SeasonAdvice, rng: &mut R) -> Option<SeasonPick> {
    Some(SeasonPick {
        color: advice.colors.choose(rng)?.clone(),
        pattern: advice.patterns.choose(rng)?.clone(),
        material: advice.materials.choose(rng)?.clone(),
    })
}
