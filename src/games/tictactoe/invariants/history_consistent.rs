//! History consistency invariant: each snapshot adds exactly its recorded move.

use super::super::{GameEngine, Position, Snapshot};
use super::Invariant;

/// Invariant: history replays move by move.
///
/// Snapshot 0 is the empty board with no move. Every later snapshot
/// records a move on a square that was empty one step earlier, and that
/// square is the only one that changed.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    fn step_holds(before: &Snapshot, after: &Snapshot) -> bool {
        let Some(played) = after.last_move() else {
            return false;
        };
        if !before.board().is_empty(played) || after.board().is_empty(played) {
            return false;
        }
        Position::ALL
            .iter()
            .filter(|pos| **pos != played)
            .all(|pos| before.board().get(*pos) == after.board().get(*pos))
    }
}

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let Some(start) = history.first() else {
            return false;
        };
        if start.last_move().is_some() || start.board().occupied_count() > 0 {
            return false;
        }
        history
            .windows(2)
            .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly its recorded move to the previous board"
    }
}
