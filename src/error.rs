//! Crate error type.
//!
//! Expected-but-invalid gameplay inputs (double clicks, clicks during the
//! resolution lock) are *not* errors; they come back as
//! [`SelectOutcome::Ignored`](crate::engine::SelectOutcome). Errors are
//! reserved for integration bugs: ids that do not exist on the board,
//! configurations that cannot produce a board, and replay logs that do
//! not apply.

use thiserror::Error;

use crate::core::{CardId, Symbol};

/// Errors surfaced by the engine and configuration layer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The card id does not exist on the current board.
    #[error("unknown card id: {0}")]
    UnknownCard(CardId),

    /// A board needs at least one symbol.
    #[error("symbol set is empty")]
    EmptySymbolSet,

    /// Symbol ids must be distinct.
    #[error("duplicate symbol in configuration: {0}")]
    DuplicateSymbol(Symbol),

    /// A recorded transition did not apply cleanly during replay.
    #[error("transition {sequence} does not apply to the reconstructed state")]
    CorruptHistory {
        /// Sequence number of the offending record.
        sequence: u32,
    },
}
