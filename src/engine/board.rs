//! Board state: the shuffled card sequence and its bookkeeping.
//!
//! A board is built fresh on every (re)initialization: two cards per
//! symbol, ids assigned in definition order, then a Fisher-Yates shuffle
//! of the sequence. Nothing survives a rebuild except the RNG stream that
//! produced it.
//!
//! The board tracks the pending selection (at most two card ids), the
//! move and match counters, the win flag, and a `generation` counter that
//! increases on every rebuild. The generation is how stale resolution
//! tickets are detected after a reset.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, CardId, GameRng, Symbol};

/// The card grid and its counters.
///
/// Mutation goes through the engine; the board only exposes read access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Cards in display order (post-shuffle).
    cards: Vec<Card>,

    /// CardId -> position in `cards`.
    index: FxHashMap<CardId, usize>,

    /// Face-up, unresolved selections. Never more than 2.
    pending: SmallVec<[CardId; 2]>,

    /// Completed pair-checks.
    move_count: u32,

    /// Confirmed pairs.
    match_count: u32,

    /// True iff every pair has been matched.
    won: bool,

    /// Increases on every rebuild; invalidates stale resolution tickets.
    generation: u64,
}

impl Board {
    /// Build a shuffled board with two cards per symbol.
    pub(crate) fn build(symbols: &[Symbol], rng: &mut GameRng, generation: u64) -> Self {
        let mut cards = Vec::with_capacity(symbols.len() * 2);
        let mut next_id = 0u32;
        for &symbol in symbols {
            for _ in 0..2 {
                cards.push(Card::face_down(CardId::new(next_id), symbol));
                next_id += 1;
            }
        }

        rng.shuffle(&mut cards);

        let index = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();

        Self {
            cards,
            index,
            pending: SmallVec::new(),
            move_count: 0,
            match_count: 0,
            won: false,
            generation,
        }
    }

    // === Read access ===

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&pos| &self.cards[pos])
    }

    /// The face-up, unresolved selections (0, 1, or 2 ids).
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Completed pair-checks.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Confirmed pairs.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    /// True iff every pair has been matched.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Number of symbols on this board.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Board generation; increases on every rebuild.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The two pending cards, once a pair is complete.
    #[must_use]
    pub(crate) fn pending_pair(&self) -> Option<(CardId, CardId)> {
        match self.pending.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    // === Mutation (engine only) ===

    /// Flip a card face-up and add it to the pending selection.
    ///
    /// Caller has already validated the card is selectable and the
    /// pending selection has room.
    pub(crate) fn reveal(&mut self, id: CardId) {
        debug_assert!(self.pending.len() < 2, "pending selection never exceeds 2");
        if let Some(&pos) = self.index.get(&id) {
            self.cards[pos].face_up = true;
            self.pending.push(id);
        }
    }

    /// Count a completed pair-check.
    pub(crate) fn count_move(&mut self) {
        self.move_count += 1;
    }

    /// Mark both pending cards matched and clear the selection.
    ///
    /// Returns true when this was the final pair.
    pub(crate) fn confirm_match(&mut self) -> bool {
        for id in self.pending.drain(..) {
            if let Some(&pos) = self.index.get(&id) {
                self.cards[pos].matched = true;
            }
        }
        self.match_count += 1;
        if self.match_count as usize == self.symbol_count() {
            self.won = true;
        }
        self.won
    }

    /// Flip both pending cards back down and clear the selection.
    pub(crate) fn flip_back(&mut self) {
        for id in self.pending.drain(..) {
            if let Some(&pos) = self.index.get(&id) {
                self.cards[pos].face_up = false;
            }
        }
    }
}
