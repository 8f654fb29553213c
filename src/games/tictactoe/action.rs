//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Applying one either records
//! a new snapshot or is turned away with a reason; a turned-away move is
//! expected input and never an error.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The index does not name a square on the board.
    #[display("Square index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner or is a draw.
    #[display("Game is already over")]
    GameOver,
}

/// What happened to a requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDisposition {
    /// The move was recorded as snapshot `step`.
    Accepted {
        /// Index of the new snapshot in history.
        step: usize,
        /// The move that was played.
        played: Move,
    },
    /// The move was ignored; state is unchanged.
    Rejected(RejectReason),
}

impl MoveDisposition {
    /// Returns true if the move changed the game.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveDisposition::Accepted { .. })
    }
}
