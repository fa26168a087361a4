//! Transition history for replay and debugging.
//!
//! The engine records every *accepted* input: selections that actually
//! flipped a card, and resolutions that actually ran. Ignored inputs are
//! not state transitions and are not recorded. Together with the config
//! and seed, the record sequence fully determines the final state; see
//! [`MatchEngine::replay`](crate::engine::MatchEngine::replay).

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// A single accepted state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A card was revealed.
    Selected {
        /// The revealed card.
        card: CardId,
    },

    /// The pending pair was resolved.
    ///
    /// Carries no payload: the outcome is determined by the board.
    Resolved,
}

/// A recorded transition with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// 0-based position in the game's transition sequence.
    pub sequence: u32,

    /// The transition taken.
    pub transition: Transition,
}

impl TransitionRecord {
    /// Create a new transition record.
    #[must_use]
    pub fn new(sequence: u32, transition: Transition) -> Self {
        Self {
            sequence,
            transition,
        }
    }
}
