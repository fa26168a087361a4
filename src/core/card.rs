//! Card identity and per-card state.
//!
//! Every card on a board has a stable `CardId`. Ids are assigned in
//! definition order (0..2n) *before* the board is shuffled, so they survive
//! shuffling and a renderer can key on them for the life of a board. A
//! reset reassigns ids from zero.
//!
//! ## Usage
//!
//! ```
//! use burger_pairs::core::{Card, CardId, Symbol};
//!
//! let card = Card::face_down(CardId::new(3), Symbol::new(1));
//! assert!(card.selectable());
//! assert!(!card.face_up);
//! assert!(!card.matched);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on a board.
///
/// Stable for the life of a board; reassigned on reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID from a raw index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card face. Each symbol appears on exactly two cards per board.
///
/// Symbols are opaque to the engine; display names live in
/// [`SymbolConfig`](crate::core::SymbolConfig).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a symbol from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// A card on the board at a specific moment.
///
/// `matched` is terminal: once set, the card is out of play and its
/// `face_up` flag is frozen. The engine never mutates a matched card again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity within the current board.
    pub id: CardId,

    /// The face this card shows when revealed.
    pub symbol: Symbol,

    /// Face-up and awaiting resolution.
    pub face_up: bool,

    /// Permanently matched and removed from interaction.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Check whether this card can currently be selected.
    ///
    /// A card is selectable while it is face-down and still in play.
    #[must_use]
    pub const fn selectable(&self) -> bool {
        !self.face_up && !self.matched
    }
}
