//! Clarification dialogue for the Busana assistant
//!
//! [`ClarificationMachine`] is stateless and shared; every conversation
//! carries its own [`ConversationContext`].

mod context;
mod machine;
mod questions;

pub use context::{ConversationContext, DialogueState};
pub use machine::{ClarificationMachine, Turn};
pub use questions::{
    GENDER_QUESTION, OCCASION_QUESTION, REPROMPT, SKIN_TONE_QUESTION, clarification_question,
    question_for,
};
