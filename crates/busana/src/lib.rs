//! Busana: Indonesian fashion recommendation dialogue engine
//!
//! ```no_run
//! # async fn run() -> busana::Result<()> {
//! let assistant = busana::FashionAssistant::new()?;
//! let mut session = assistant.session();
//! let reply = session.respond("Baju formal untuk pria kulit cerah").await;
//! println!("{}", reply.text());
//! # Ok(())
//! # }
//! ```

mod assistant;
mod config;
mod session;

pub use assistant::{AssistantBuilder, FashionAssistant};
pub use config::{BusanaConfig, CatalogConfig, DialogueConfig, MaxAttemptsAction, ResponseConfig};
pub use session::{FAREWELL, GIVE_UP, GREETING, Reply, Session, SessionId};

pub use busana_core::{
    BusanaError, ClassificationResult, ClassifierError, Gender, IntentCategory, IntentClassifier,
    Occasion, Result, Season, SkinTone, Slot, SlotSet, Weather,
};

pub mod classifier {
    pub use busana_classifier::{
        ClassifierAdapter, ClassifierConfig, DecisionSource, HttpClassifier, IntentDecision,
        KeywordFallback, MockCall, MockClassifier,
    };
}

pub mod catalog {
    pub use busana_catalog::{
        Outfit, RecommendationMapper, RecommendationRecord, RecommendationTable, SeasonAdvice,
        WeatherAdvice,
    };
}

pub mod dialogue {
    pub use busana_dialogue::{
        ClarificationMachine, ConversationContext, DialogueState, Turn, clarification_question,
    };
}

pub mod extract {
    pub use busana_extract::{KeywordTables, ParameterExtractor};
}

pub mod response {
    pub use busana_response::{Response, ResponseAssembler, StructuredPayload};
}
