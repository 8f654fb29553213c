//! Classification of a board: still playing, won, or drawn.

use super::rules::WinningLine;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a board.
///
/// Draw is its own variant rather than a pseudo-winner, so a draw can
/// never be mistaken for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win {
        /// The player owning the line.
        player: Player,
        /// The first completed line in priority order.
        line: WinningLine,
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Positions to highlight: the winning line, or nothing.
    pub fn winning_line(&self) -> &[Position] {
        match self {
            Outcome::Win { line, .. } => line.positions(),
            Outcome::InProgress | Outcome::Draw => &[],
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once no further moves are allowed.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Winner: {}", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
