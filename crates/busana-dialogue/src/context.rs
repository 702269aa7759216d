//! Per-session conversation state

use serde::{Deserialize, Serialize};

use busana_core::{Slot, SlotSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "slot")]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingClarification(Slot),
}

/// Mutable state of one conversation. Owned by exactly one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    pub state: DialogueState,
    pub pending_slots: SlotSet,
    /// Consecutive unrecognized answers for the outstanding slot.
    pub attempts: u32,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn awaiting_clarification(&self) -> bool {
        matches!(self.state, DialogueState::AwaitingClarification(_))
    }

    pub fn outstanding_slot(&self) -> Option<Slot> {
        match self.state {
            DialogueState::AwaitingClarification(slot) => Some(slot),
            DialogueState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use busana_core::Gender;

    #[test]
    fn test_new_context_is_idle() {
        let ctx = ConversationContext::new();
        assert!(!ctx.awaiting_clarification());
        assert_eq!(ctx.outstanding_slot(), None);
        assert!(ctx.pending_slots.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctx = ConversationContext {
            state: DialogueState::AwaitingClarification(Slot::SkinTone),
            pending_slots: SlotSet::new().with_gender(Gender::Wanita),
            attempts: 2,
        };
        assert_eq!(ctx.outstanding_slot(), Some(Slot::SkinTone));

        ctx.reset();
        assert_eq!(ctx, ConversationContext::default());
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(DialogueState::AwaitingClarification(Slot::Occasion)).unwrap();
        assert_eq!(json["state"], "awaiting_clarification");
        assert_eq!(json["slot"], "occasion");
    }
}
