use std::sync::Arc;
use tracing::{debug, info};

use busana_core::{Slot, SlotSet};
use busana_extract::ParameterExtractor;

use crate::context::{ConversationContext, DialogueState};
use crate::questions::{REPROMPT, question_for};

/// Outcome of one dialogue turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A mandatory slot is missing; `repeated` is set when the same question is re-asked.
    Ask {
        slot: Slot,
        question: &'static str,
        repeated: bool,
    },
    /// Every mandatory slot is resolved. The context is back to idle.
    Complete(SlotSet),
    /// Input was blank; nothing changed.
    Reprompt(&'static str),
}

impl Turn {
    pub fn is_complete(&self) -> bool {
        matches!(self, Turn::Complete(_))
    }
}

/// Decides what to ask next. Holds no conversation state of its own.
#[derive(Debug, Clone)]
pub struct ClarificationMachine {
    extractor: Arc<ParameterExtractor>,
}

impl ClarificationMachine {
    pub fn new(extractor: Arc<ParameterExtractor>) -> Self {
        Self { extractor }
    }

    pub fn extractor(&self) -> &ParameterExtractor {
        &self.extractor
    }

    /// Route `text` by the context's state. `seed` only applies to fresh queries.
    pub fn step(&self, ctx: &mut ConversationContext, text: &str, seed: &SlotSet) -> Turn {
        if ctx.awaiting_clarification() {
            self.answer(ctx, text)
        } else {
            self.start(ctx, text, seed)
        }
    }

    /// Handle a fresh query. Slots found in `text` win over `seed`.
    pub fn start(&self, ctx: &mut ConversationContext, text: &str, seed: &SlotSet) -> Turn {
        if text.trim().is_empty() {
            return Turn::Reprompt(REPROMPT);
        }

        let mut slots = self.extractor.extract(text);
        slots.fill_missing_from(seed);

        ctx.pending_slots = slots;
        ctx.attempts = 0;
        self.advance(ctx, false)
    }

    /// Interpret `text` only as the answer to the outstanding slot.
    pub fn answer(&self, ctx: &mut ConversationContext, text: &str) -> Turn {
        if text.trim().is_empty() {
            return Turn::Reprompt(REPROMPT);
        }

        let Some(slot) = ctx.outstanding_slot() else {
            return self.start(ctx, text, &SlotSet::new());
        };

        let answer = self.extractor.extract_slot(slot, text);
        if ctx.pending_slots.take_slot(&answer, slot) {
            debug!(slot = %slot, "Clarification answered");
            ctx.attempts = 0;
            return self.advance(ctx, false);
        }

        ctx.attempts += 1;
        debug!(slot = %slot, attempts = ctx.attempts, "Clarification answer not recognized");
        self.advance(ctx, true)
    }

    /// Fill the outstanding slot from `defaults` and continue.
    pub fn resolve_outstanding(&self, ctx: &mut ConversationContext, defaults: &SlotSet) -> Turn {
        if let Some(slot) = ctx.outstanding_slot() {
            ctx.pending_slots.take_slot(defaults, slot);
            info!(slot = %slot, "Outstanding slot filled with default");
        }
        ctx.attempts = 0;
        self.advance(ctx, false)
    }

    fn advance(&self, ctx: &mut ConversationContext, repeated: bool) -> Turn {
        let missing = ctx
            .pending_slots
            .first_missing()
            .and_then(|slot| question_for(slot).map(|question| (slot, question)));

        match missing {
            Some((slot, question)) => {
                if ctx.state != DialogueState::AwaitingClarification(slot) {
                    info!(slot = %slot, "Awaiting clarification");
                }
                ctx.state = DialogueState::AwaitingClarification(slot);
                Turn::Ask {
                    slot,
                    question,
                    repeated,
                }
            }
            None => {
                let slots = ctx.pending_slots;
                info!(?slots, "All mandatory slots resolved");
                ctx.reset();
                Turn::Complete(slots)
            }
        }
    }
}

impl Default for ClarificationMachine {
    fn default() -> Self {
        Self::new(Arc::new(ParameterExtractor::default()))
    }
}
