//! Error types for the puzzle core.
//!
//! Classification outcomes are not errors: a wrong composition or a wrong
//! arrangement is an ordinary [`ClassificationResult`](crate::ClassificationResult).
//! The types here cover caller bugs (bad slot ids, actions in the wrong
//! state) and malformed level tables.

use thiserror::Error;

use crate::isomer::IsomerClass;
use crate::session::GameState;

/// A slot id outside the fixed octahedral layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("invalid slot id {0}: the octahedral layout has slots 0..6")]
    InvalidSlot(usize),
}

/// Rejected session actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Slot(#[from] SlotError),

    /// A gameplay action (place, reset, submit, show answer, advance)
    /// outside the `Playing` state.
    #[error("cannot {action} while the session is in the {state:?} state")]
    NotPlaying {
        action: &'static str,
        state: GameState,
    },

    /// A menu transition that is not defined from the current state.
    #[error("cannot {action} from the {state:?} state")]
    InvalidTransition {
        action: &'static str,
        state: GameState,
    },
}

/// Errors raised while loading a level table.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to parse level table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level table contains no levels")]
    NoLevels,

    /// A level asks for more ligands than there are slots.
    #[error("level {level} requires {total} ligands but only 6 slots exist")]
    TooManyLigands { level: u32, total: usize },

    #[error("level {level} targets {target} but the table has no solution for it")]
    MissingSolution { level: u32, target: IsomerClass },

    /// The level's solution does not classify as a success for that level.
    #[error("level {level}: the {target} solution does not satisfy the level's composition and geometry")]
    BadSolution { level: u32, target: IsomerClass },
}
