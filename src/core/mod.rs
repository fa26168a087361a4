//! Core types: card identity, configuration, RNG.
//!
//! This module contains the building blocks the engine is assembled from.
//! Hosts configure the deck via `GameConfig` rather than modifying the
//! engine.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, CardId, Symbol};
pub use config::{GameConfig, SymbolConfig, DEFAULT_REVEAL_DELAY, DEFAULT_WIN_DELAY};
pub use rng::{GameRng, GameRngState};
