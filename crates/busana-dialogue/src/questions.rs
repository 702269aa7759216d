//! Fixed clarification prompts

use busana_core::{Slot, SlotSet};

pub const GENDER_QUESTION: &str = "Apakah rekomendasi ini untuk pria atau wanita?";
pub const SKIN_TONE_QUESTION: &str =
    "Bagaimana warna kulit Anda? (cerah, sawo matang, atau gelap?)";
pub const OCCASION_QUESTION: &str =
    "Untuk acara apa pakaian ini akan dikenakan? (formal, casual, atau acara khusus?)";
pub const REPROMPT: &str = "Maaf, bisakah Anda mengulangi?";

/// Question for a mandatory slot. Optional slots are never asked.
pub fn question_for(slot: Slot) -> Option<&'static str> {
    match slot {
        Slot::Gender => Some(GENDER_QUESTION),
        Slot::SkinTone => Some(SKIN_TONE_QUESTION),
        Slot::Occasion => Some(OCCASION_QUESTION),
        Slot::Weather | Slot::Season => None,
    }
}

/// Question for the first unresolved mandatory slot, or `None` when complete.
pub fn clarification_question(slots: &SlotSet) -> Option<&'static str> {
    slots.first_missing().and_then(question_for)
}
