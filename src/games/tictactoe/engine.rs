//! Tic-tac-toe game engine with time travel.
//!
//! The engine owns the full move history and a cursor selecting the
//! displayed snapshot. Jumping only moves the cursor; playing a move from
//! an earlier snapshot discards the snapshots after it.

use super::action::{Move, MoveDisposition, RejectReason};
use super::error::EngineError;
use super::history::{History, MoveEntry, SortOrder, Snapshot};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::evaluate_outcome;
use super::{Board, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Deserialized state is checked against [`EngineInvariants`] before it
/// becomes an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameEngine")]
pub struct GameEngine {
    history: History,
    cursor: usize,
}

/// Unchecked wire form of [`GameEngine`].
#[derive(Deserialize)]
struct RawGameEngine {
    history: History,
    cursor: usize,
}

impl TryFrom<RawGameEngine> for GameEngine {
    type Error = EngineError;

    fn try_from(raw: RawGameEngine) -> Result<Self, Self::Error> {
        let engine = Self {
            history: raw.history,
            cursor: raw.cursor,
        };
        EngineInvariants::check_all(&engine).map_err(|violations| {
            let reasons = violations
                .into_iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%reasons, "Rejecting loaded engine state");
            EngineError::InvalidState { reasons }
        })?;
        Ok(engine)
    }
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// Plays the current player's mark at `index` (0-8).
    ///
    /// Occupied squares, decided games and off-board indices leave the
    /// engine untouched and report why.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, index: usize) -> MoveDisposition {
        let Some(position) = Position::from_index(index) else {
            warn!(index, "Ignoring move off the board");
            return MoveDisposition::Rejected(RejectReason::OutOfBounds(index));
        };

        let board = *self.current_board();
        if evaluate_outcome(&board).is_decided() {
            debug!("Ignoring move after game end");
            return MoveDisposition::Rejected(RejectReason::GameOver);
        }
        if !board.is_empty(position) {
            debug!(%position, "Ignoring move on occupied square");
            return MoveDisposition::Rejected(RejectReason::SquareOccupied(position));
        }

        let player = self.current_player();
        let next = board.with_mark(position, player);
        self.cursor = self
            .history
            .branch_from(self.cursor, Snapshot::after_move(next, position));

        info!(%player, %position, step = self.cursor, "Move applied");
        self.debug_check_invariants();

        MoveDisposition::Accepted {
            step: self.cursor,
            played: Move::new(player, position),
        }
    }

    /// Plays a move by named position.
    pub fn play(&mut self, position: Position) -> MoveDisposition {
        self.apply_move(position.to_index())
    }

    /// Moves the cursor to `step` without touching history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        if step >= self.history.len() {
            warn!(step, "Rejecting jump past end of history");
            return Err(EngineError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.cursor, to = step, "Jumping in history");
        self.cursor = step;
        Ok(())
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &[Snapshot] {
        self.history.as_slice()
    }

    /// Snapshot at `step`.
    pub fn snapshot(&self, step: usize) -> Result<&Snapshot, EngineError> {
        self.history.get(step)
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: history holds at least the starting snapshot.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> &Board {
        self.history.as_slice()[self.cursor].board()
    }

    /// Player to move at the cursor.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Outcome of the board at the cursor.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(self.current_board())
    }

    /// Squares a move would be accepted on right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_decided() {
            return Vec::new();
        }
        Position::empty_squares(self.current_board())
    }

    /// Short label for a snapshot: `game start`, or `(column, row)` of its move.
    #[instrument(skip(self))]
    pub fn move_label(&self, step: usize) -> Result<String, EngineError> {
        let snapshot = self.history.get(step)?;
        Ok(match snapshot.last_move() {
            Some(position) if step > 0 => position.coordinates(),
            _ => "game start".to_string(),
        })
    }

    /// The move list as a presentation shows it.
    #[instrument(skip(self))]
    pub fn move_entries(&self, order: SortOrder) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .as_slice()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                let label = match snapshot.last_move() {
                    Some(position) if step > 0 => {
                        format!("go to move #{} {}", step, position.coordinates())
                    }
                    _ => "go to game start".to_string(),
                };
                MoveEntry {
                    step,
                    label,
                    is_current: step == self.cursor,
                }
            })
            .collect();

        if order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Status text: `Next player: X`, `Winner: O` or `Winner: Draw`.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::InProgress => format!("Next player: {}", self.current_player()),
            Outcome::Win { player, .. } => format!("Winner: {}", player),
            Outcome::Draw => "Winner: Draw".to_string(),
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    #[cfg(test)]
    pub(crate) fn set_cursor_unchecked(&mut self, cursor: usize) {
        self.cursor = cursor;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play_all(engine: &mut GameEngine, moves: &[usize]) {
        for &index in moves {
            assert!(
                engine.apply_move(index).is_accepted(),
                "move {} should be accepted",
                index
            );
        }
    }

    #[test]
    fn test_new_engine_starts_empty() {
        let engine = GameEngine::new();
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.current_board(), &Board::new());
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.status_line(), "Next player: X");
    }

    #[test]
    fn test_accepted_move_reports_step_and_player() {
        let mut engine = GameEngine::new();
        let disposition = engine.apply_move(4);
        assert_eq!(
            disposition,
            MoveDisposition::Accepted {
                step: 1,
                played: Move::new(Player::X, Position::Center),
            }
        );
        assert_eq!(
            engine.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[4]);
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(4),
            MoveDisposition::Rejected(RejectReason::SquareOccupied(Position::Center))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_off_board_index_rejected() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.apply_move(9),
            MoveDisposition::Rejected(RejectReason::OutOfBounds(9))
        );
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 3, 1, 4, 2]);
        assert_eq!(engine.outcome().winner(), Some(Player::X));
        let before = engine.clone();
        assert_eq!(
            engine.apply_move(8),
            MoveDisposition::Rejected(RejectReason::GameOver)
        );
        assert_eq!(engine, before);
        assert!(engine.valid_moves().is_empty());
        assert_eq!(engine.status_line(), "Winner: X");
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1]);
        let before = engine.clone();
        assert_eq!(
            engine.jump_to(3),
            Err(EngineError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1, 2]);
        engine.jump_to(1).unwrap();
        assert_eq!(engine.len(), 4);
        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.current_player(), Player::O);
        engine.jump_to(3).unwrap();
        assert_eq!(engine.current_board().occupied_count(), 3);
    }

    #[test]
    fn test_move_labels() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[2, 3]);
        assert_eq!(engine.move_label(0).unwrap(), "game start");
        assert_eq!(engine.move_label(1).unwrap(), "(3, 1)");
        assert_eq!(engine.move_label(2).unwrap(), "(1, 2)");
        assert!(engine.move_label(3).is_err());
    }

    #[test]
    fn test_move_entries_follow_sort_order() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 4]);
        engine.jump_to(1).unwrap();

        let ascending = engine.move_entries(SortOrder::Ascending);
        let labels: Vec<&str> = ascending.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["go to game start", "go to move #1 (1, 1)", "go to move #2 (2, 2)"]
        );
        assert!(ascending[1].is_current);
        assert!(!ascending[0].is_current);

        let descending = engine.move_entries(SortOrder::Descending);
        let steps: Vec<usize> = descending.iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert_eq!(engine.cursor(), 1);
    }

    #[test]
    fn test_valid_moves_shrink() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.valid_moves().len(), 9);
        play_all(&mut engine, &[0, 8]);
        let valid = engine.valid_moves();
        assert_eq!(valid.len(), 7);
        assert!(!valid.contains(&Position::TopLeft));
        assert!(!valid.contains(&Position::BottomRight));
    }

    #[test]
    fn test_engine_serializes() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[4, 0]);
        engine.jump_to(1).unwrap();
        let json = serde_json::to_string(&engine).unwrap();
        let restored: GameEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, engine);
    }

    fn start_snapshot_json() -> serde_json::Value {
        serde_json::to_value(Snapshot::initial()).unwrap()
    }

    #[test]
    fn test_deserialize_rejects_cursor_past_end() {
        let json = serde_json::json!({
            "history": { "snapshots": [start_snapshot_json()] },
            "cursor": 5,
        });
        let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
        assert!(err.to_string().contains("Cursor points at a recorded snapshot"));
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = serde_json::json!({
            "history": { "snapshots": [] },
            "cursor": 0,
        });
        assert!(serde_json::from_value::<GameEngine>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_snapshots() {
        // Snapshot 1 claims a move but shows an O where X should have played.
        let board = Board::new().with_mark(Position::Center, Player::O);
        let json = serde_json::json!({
            "history": {
                "snapshots": [
                    start_snapshot_json(),
                    serde_json::to_value(Snapshot::after_move(board, Position::Center)).unwrap(),
                ],
            },
            "cursor": 1,
        });
        let err = serde_json::from_value::<GameEngine>(json).unwrap_err();
        assert!(err.to_string().contains("Players alternate turns"));
    }
}
