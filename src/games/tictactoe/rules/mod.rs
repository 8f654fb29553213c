//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating any board,
//! reachable or not. Rules are separated from history storage so the
//! engine and its tests can call them directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// Lines are checked before fullness, so a full board that completes a
/// line is a win, never a draw.
#[instrument]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
