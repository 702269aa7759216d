use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use busana_catalog::{DEFAULT_OCCASION, DEFAULT_SKIN_TONE};
use busana_core::{Gender, Slot, SlotSet};
use busana_dialogue::{ConversationContext, REPROMPT, Turn};
use busana_response::Response;

use crate::assistant::Components;
use crate::config::MaxAttemptsAction;

pub const GREETING: &str = "Halo! Saya asisten fashion Anda. Apa jenis pakaian yang Anda cari?";
pub const FAREWELL: &str = "Terima kasih telah menggunakan asisten fashion ini. Sampai jumpa!";
pub const GIVE_UP: &str =
    "Maaf, saya belum bisa memahami jawaban Anda. Silakan mulai lagi dengan permintaan baru.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What the assistant says back for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Clarification { slot: Slot, question: String },
    Recommendation(Response),
    Reprompt(String),
    GiveUp(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Clarification { question, .. } => question,
            Reply::Recommendation(response) => &response.text,
            Reply::Reprompt(text) | Reply::GiveUp(text) => text,
        }
    }

    pub fn response(&self) -> Option<&Response> {
        match self {
            Reply::Recommendation(response) => Some(response),
            _ => None,
        }
    }
}

/// One conversation. Turns are serialized by `&mut self`.
pub struct Session {
    id: SessionId,
    started_at: DateTime<Utc>,
    components: Arc<Components>,
    context: ConversationContext,
    rng: StdRng,
    turns: u64,
}

impl Session {
    pub(crate) fn new(components: Arc<Components>) -> Self {
        let rng = match components.config.response.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Self {
            id: SessionId::new(),
            started_at: Utc::now(),
            components,
            context: ConversationContext::new(),
            rng,
            turns: 0,
        };
        debug!(session_id = %session.id, "Session started");
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Drop any pending clarification and start over.
    pub fn reset(&mut self) {
        self.context.reset();
    }

    pub async fn respond(&mut self, text: &str) -> Reply {
        self.turns += 1;
        let text = text.trim();
        if text.is_empty() {
            return Reply::Reprompt(REPROMPT.to_string());
        }

        let turn = if self.context.awaiting_clarification() {
            self.components.machine.answer(&mut self.context, text)
        } else {
            let seed = self.intent_seed(text).await;
            self.components
                .machine
                .start(&mut self.context, text, &seed)
        };

        self.finish(turn)
    }

    async fn intent_seed(&self, text: &str) -> SlotSet {
        let decision = self.components.classifier.classify_detailed(text).await;
        info!(
            session_id = %self.id,
            category = %decision.category,
            confidence = ?decision.confidence,
            source = ?decision.source,
            "Intent resolved"
        );

        if self.components.config.classifier.seed_from_intent {
            decision.seed_slots()
        } else {
            SlotSet::new()
        }
    }

    fn finish(&mut self, turn: Turn) -> Reply {
        match turn {
            Turn::Complete(slots) => {
                let record = self.components.mapper.recommend(&slots);
                let response = self
                    .components
                    .assembler
                    .assemble(&record, &slots, &mut self.rng);
                info!(
                    session_id = %self.id,
                    parameters = ?slots,
                    used_default = record.used_default(),
                    "Recommendation delivered"
                );
                Reply::Recommendation(response)
            }
            Turn::Ask {
                slot,
                question,
                repeated,
            } => {
                let max_attempts = self.components.config.dialogue.max_attempts;
                if repeated && self.context.attempts >= max_attempts {
                    return self.on_max_attempts(slot, question);
                }
                Reply::Clarification {
                    slot,
                    question: question.to_string(),
                }
            }
            Turn::Reprompt(text) => Reply::Reprompt(text.to_string()),
        }
    }

    fn on_max_attempts(&mut self, slot: Slot, question: &'static str) -> Reply {
        let action = self.components.config.dialogue.on_max_attempts;
        warn!(
            session_id = %self.id,
            slot = %slot,
            attempts = self.context.attempts,
            action = ?action,
            "Clarification attempts exhausted"
        );

        match action {
            MaxAttemptsAction::KeepAsking => Reply::Clarification {
                slot,
                question: question.to_string(),
            },
            MaxAttemptsAction::UseDefaults => {
                let defaults = SlotSet::new()
                    .with_gender(Gender::Pria)
                    .with_skin_tone(DEFAULT_SKIN_TONE)
                    .with_occasion(DEFAULT_OCCASION);
                let turn = self
                    .components
                    .machine
                    .resolve_outstanding(&mut self.context, &defaults);
                self.finish(turn)
            }
            MaxAttemptsAction::GiveUp => {
                self.context.reset();
                Reply::GiveUp(GIVE_UP.to_string())
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .field("context", &self.context)
            .field("turns", &self.turns)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{AssistantBuilder, FashionAssistant};
    use crate::config::BusanaConfig;
    use busana_classifier::MockClassifier;
    use busana_core::{IntentClassifier, Occasion, SkinTone};
    use busana_dialogue::{GENDER_QUESTION, SKIN_TONE_QUESTION};

    fn seeded_config() -> BusanaConfig {
        let mut config = BusanaConfig::default();
        config.response.seed = Some(42);
        config
    }

    fn assistant_with(config: BusanaConfig, mock: &MockClassifier) -> FashionAssistant {
        let classifier: Arc<dyn IntentClassifier> = Arc::new(mock.clone());
        AssistantBuilder::from_config(config)
            .classifier(classifier)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_multi_turn_conversation() {
        let assistant = AssistantBuilder::from_config(seeded_config()).build().unwrap();
        let mut session = assistant.session();

        let reply = session.respond("Pakaian untuk pria").await;
        assert_eq!(
            reply,
            Reply::Clarification {
                slot: Slot::SkinTone,
                question: SKIN_TONE_QUESTION.to_string()
            }
        );

        let reply = session.respond("kulit sawo matang").await;
        assert!(matches!(reply, Reply::Clarification { slot: Slot::Occasion, .. }));

        let reply = session.respond("buat interview").await;
        let response = reply.response().unwrap();
        let params = response.structured_payload.parameters;
        assert_eq!(params.gender, Some(Gender::Pria));
        assert_eq!(params.skin_tone, Some(SkinTone::Dark));
        assert_eq!(params.occasion, Some(Occasion::Interview));
        assert!(response.text.contains(&response.structured_payload.clothing.top));
        assert!(!session.context().awaiting_clarification());
        assert_eq!(session.turns(), 3);
    }

    #[tokio::test]
    async fn test_blank_input_reprompts() {
        let assistant = FashionAssistant::new().unwrap();
        let mut session = assistant.session();
        assert_eq!(
            session.respond("  ").await,
            Reply::Reprompt(REPROMPT.to_string())
        );
        assert!(!session.context().awaiting_clarification());
    }

    #[tokio::test]
    async fn test_confident_intent_seeds_slots() {
        let mut mock = MockClassifier::default();
        mock.set_prediction(3, 0.9);
        let mut config = seeded_config();
        config.classifier.seed_from_intent = true;
        let assistant = assistant_with(config, &mock);
        let mut session = assistant.session();

        let reply = session.respond("tolong rekomendasikan sesuatu").await;
        let params = reply.response().unwrap().structured_payload.parameters;
        assert_eq!(params.occasion, Some(Occasion::Formal));
        assert_eq!(params.gender, Some(Gender::Wanita));
        assert_eq!(params.skin_tone, Some(SkinTone::Dark));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_seeding_is_off_by_default() {
        let mut mock = MockClassifier::default();
        mock.set_prediction(3, 0.9);
        let assistant = assistant_with(seeded_config(), &mock);
        let mut session = assistant.session();

        let reply = session.respond("tolong rekomendasikan sesuatu").await;
        assert_eq!(reply.text(), GENDER_QUESTION);
    }

    #[tokio::test]
    async fn test_interview_query_still_asks_for_missing_slots() {
        for seed_from_intent in [false, true] {
            let mut config = seeded_config();
            config.classifier.seed_from_intent = seed_from_intent;
            let assistant = AssistantBuilder::from_config(config).build().unwrap();

            let mut session = assistant.session();
            let reply = session.respond("Baju untuk interview").await;
            assert_eq!(
                reply,
                Reply::Clarification {
                    slot: Slot::Gender,
                    question: GENDER_QUESTION.to_string()
                }
            );
            assert_eq!(
                session.context().pending_slots.occasion,
                Some(Occasion::Interview)
            );

            let mut session = assistant.session();
            let reply = session.respond("Baju interview untuk wanita").await;
            assert_eq!(
                reply,
                Reply::Clarification {
                    slot: Slot::SkinTone,
                    question: SKIN_TONE_QUESTION.to_string()
                }
            );
            assert_eq!(session.context().pending_slots.gender, Some(Gender::Wanita));
        }
    }

    #[tokio::test]
    async fn test_failed_classifier_never_seeds() {
        let mut mock = MockClassifier::default();
        mock.set_error("connection refused");
        let mut config = seeded_config();
        config.classifier.seed_from_intent = true;
        let assistant = assistant_with(config, &mock);
        let mut session = assistant.session();

        let reply = session.respond("tolong rekomendasikan sesuatu").await;
        assert_eq!(reply.text(), GENDER_QUESTION);
    }

    #[tokio::test]
    async fn test_classifier_not_called_for_clarification_answers() {
        let mut mock = MockClassifier::default();
        mock.set_prediction(19, 0.95);
        let assistant = assistant_with(seeded_config(), &mock);
        let mut session = assistant.session();

        session.respond("baju pesta").await;
        session.respond("wanita").await;
        session.respond("cerah").await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_classifier_failure_still_answers() {
        let mut mock = MockClassifier::default();
        mock.set_error("connection refused");
        let assistant = assistant_with(seeded_config(), &mock);
        let mut session = assistant.session();

        let reply = session
            .respond("baju formal untuk wanita kulit cerah")
            .await;
        assert!(reply.response().is_some());
    }

    #[tokio::test]
    async fn test_keep_asking_never_gives_up() {
        let assistant = AssistantBuilder::from_config(seeded_config()).build().unwrap();
        let mut session = assistant.session();
        session.respond("baju pesta").await;

        for _ in 0..5 {
            let reply = session.respond("hmm").await;
            assert_eq!(reply.text(), GENDER_QUESTION);
        }
        assert_eq!(session.context().attempts, 5);
    }

    #[tokio::test]
    async fn test_use_defaults_after_max_attempts() {
        let mut config = seeded_config();
        config.dialogue.max_attempts = 2;
        config.dialogue.on_max_attempts = MaxAttemptsAction::UseDefaults;
        let assistant = AssistantBuilder::from_config(config).build().unwrap();
        let mut session = assistant.session();

        session.respond("baju pesta untuk wanita").await;
        let reply = session.respond("entahlah").await;
        assert_eq!(reply.text(), SKIN_TONE_QUESTION);

        let reply = session.respond("tidak yakin").await;
        let params = reply.response().unwrap().structured_payload.parameters;
        assert_eq!(params.skin_tone, Some(SkinTone::Light));
        assert_eq!(params.gender, Some(Gender::Wanita));
        assert_eq!(params.occasion, Some(Occasion::Party));
    }

    #[tokio::test]
    async fn test_give_up_after_max_attempts() {
        let mut config = seeded_config();
        config.dialogue.max_attempts = 1;
        config.dialogue.on_max_attempts = MaxAttemptsAction::GiveUp;
        let assistant = AssistantBuilder::from_config(config).build().unwrap();
        let mut session = assistant.session();

        session.respond("baju pesta").await;
        let reply = session.respond("hmm").await;
        assert_eq!(reply, Reply::GiveUp(GIVE_UP.to_string()));
        assert_eq!(session.context(), &ConversationContext::default());
    }

    #[tokio::test]
    async fn test_seeded_sessions_repeat_replies() {
        let assistant = AssistantBuilder::from_config(seeded_config()).build().unwrap();
        let query = "baju casual untuk wanita kulit gelap saat musim gugur";

        let a = assistant.session().respond(query).await;
        let b = assistant.session().respond(query).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let assistant = FashionAssistant::new().unwrap();
        let mut first = assistant.session();
        let mut second = assistant.session();
        assert_ne!(first.id(), second.id());

        first.respond("baju pesta").await;
        assert!(first.context().awaiting_clarification());
        assert!(!second.context().awaiting_clarification());

        let reply = second.respond("wanita").await;
        assert_eq!(reply.text(), SKIN_TONE_QUESTION);
        assert_eq!(first.context().outstanding_slot(), Some(Slot::Gender));
    }
}
