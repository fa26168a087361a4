//! The matching-game engine: board, flip-check state machine, replay.
//!
//! The engine is a closed, total state machine over a pre-validated input
//! domain: every input either transitions the state or is a defined
//! no-op. The only caller-visible errors are integration bugs (unknown
//! ids, bad configuration, corrupt replay logs).

pub mod board;
pub mod event;
pub mod game;

pub use board::Board;
pub use event::{Transition, TransitionRecord};
pub use game::{
    IgnoreReason, MatchEngine, Phase, ResolutionOutcome, ResolutionTicket, SelectOutcome,
};
