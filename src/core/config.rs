//! Game configuration types.
//!
//! The engine is symbol-set agnostic: hosts describe the deck they want
//! via `SymbolConfig` entries, and the engine builds two cards per entry.
//! Display names are opaque to the engine; they exist so a renderer can
//! label faces without a side table.
//!
//! The two delays are presentation hints, not correctness parameters:
//! the engine never sleeps on them. They surface on
//! [`ResolutionTicket`](crate::engine::ResolutionTicket) and
//! [`ResolutionOutcome`](crate::engine::ResolutionOutcome) so the hosting
//! layer can schedule its animations.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::card::Symbol;
use crate::error::GameError;

/// Default pause before a revealed pair is resolved (mismatches stay
/// visible this long before flipping back).
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Default pause between clearing the final pair and the win celebration.
pub const DEFAULT_WIN_DELAY: Duration = Duration::from_millis(500);

/// Display configuration for one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// The symbol this entry describes.
    pub id: Symbol,

    /// Display name (opaque to the engine).
    pub name: String,
}

impl SymbolConfig {
    /// Create a symbol config.
    pub fn new(id: Symbol, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The symbol set. The board holds exactly two cards per entry.
    pub symbols: Vec<SymbolConfig>,

    /// How long the host should keep a completed pair visible before
    /// calling `resolve`.
    pub reveal_delay: Duration,

    /// How long the host should wait after the final match before showing
    /// the celebration.
    pub win_delay: Duration,
}

impl GameConfig {
    /// Create a configuration with the default delays.
    #[must_use]
    pub fn new(symbols: Vec<SymbolConfig>) -> Self {
        Self {
            symbols,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            win_delay: DEFAULT_WIN_DELAY,
        }
    }

    /// The stock six-symbol hamburger deck of the shipped product.
    #[must_use]
    pub fn burger() -> Self {
        let names = [
            "hamburger",
            "fries",
            "hot dog",
            "sandwich",
            "pizza",
            "stuffed flatbread",
        ];
        Self::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| SymbolConfig::new(Symbol::new(i as u16), *name))
                .collect(),
        )
    }

    /// Set the reveal delay.
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the win-celebration delay.
    #[must_use]
    pub fn with_win_delay(mut self, delay: Duration) -> Self {
        self.win_delay = delay;
        self
    }

    /// Number of symbols (= number of pairs on the board).
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Validate the configuration.
    ///
    /// The symbol set must be non-empty and symbol ids must be distinct.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.symbols.is_empty() {
            return Err(GameError::EmptySymbolSet);
        }

        let mut seen: Vec<Symbol> = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            if seen.contains(&symbol.id) {
                return Err(GameError::DuplicateSymbol(symbol.id));
            }
            seen.push(symbol.id);
        }

        Ok(())
    }

    /// Look up the display name for a symbol.
    #[must_use]
    pub fn symbol_name(&self, symbol: Symbol) -> Option<&str> {
        self.symbols
            .iter()
            .find(|s| s.id == symbol)
            .map(|s| s.name.as_str())
    }
}
