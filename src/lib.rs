//! # burger-pairs
//!
//! Deterministic core of a memory-matching game ("find the matching
//! hamburger-themed pairs") played behind an external identity provider.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Board layout comes from a seeded RNG with an
//!    unbiased Fisher-Yates shuffle. A game is fully identified by
//!    `(config, seed, transition history)` and can be replayed bit-exact.
//!
//! 2. **No timers inside the engine**: The rules never depend on wall
//!    time. Deferred pair resolution is a [`ResolutionTicket`] the host
//!    schedules; the configured delays are presentation hints.
//!
//! 3. **Total over its input domain**: Invalid-but-expected inputs
//!    (double clicks, clicks during the resolution lock) are defined
//!    no-ops, not errors. Errors are reserved for integration bugs.
//!
//! ## Modules
//!
//! - `core`: Card identity, symbols, configuration, deterministic RNG
//! - `engine`: Board state, flip-check state machine, transition replay
//! - `auth`: Identity-verification boundary (one-shot outcome, mock path,
//!   session gate); proof checking itself stays with the provider
//! - `error`: Crate error type

pub mod auth;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Card, CardId, GameConfig, GameRng, GameRngState, Symbol, SymbolConfig};

pub use crate::engine::{
    Board, IgnoreReason, MatchEngine, Phase, ResolutionOutcome, ResolutionTicket, SelectOutcome,
    Transition, TransitionRecord,
};

pub use crate::auth::{
    AuthError, AuthGate, AuthMode, IdentityVerifier, MockVerifier, ProofBundle, VerificationLevel,
    VerifyOutcome, VerifyRequest,
};

pub use crate::error::GameError;
