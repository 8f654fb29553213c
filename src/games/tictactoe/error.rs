//! Errors raised by the game engine.

use derive_more::{Display, Error};

/// Error returned by engine navigation, history queries and state loading.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A history step beyond the last recorded snapshot.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of snapshots in history.
        len: usize,
    },

    /// Loaded history has no starting snapshot.
    #[display("History must contain at least the starting snapshot")]
    EmptyHistory,

    /// Loaded engine state breaks one or more invariants.
    #[display("Invalid engine state: {}", reasons)]
    InvalidState {
        /// Descriptions of the violated invariants, `; `-separated.
        reasons: String,
    },
}
