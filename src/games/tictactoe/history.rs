//! Move history: board snapshots and the list a presentation shows for them.

use super::error::EngineError;
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An immutable board plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting position.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// A position reached by playing `last_move`.
    pub fn after_move(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// The board at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square played to reach this snapshot, `None` for the start.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

/// Ordered snapshots; index 0 is always the empty board.
///
/// Never empty. Only grows by branching from an existing step, which
/// discards everything after that step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
}

impl TryFrom<RawHistory> for History {
    type Error = EngineError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.snapshots.is_empty() {
            return Err(EngineError::EmptyHistory);
        }
        Ok(Self {
            snapshots: raw.snapshots,
        })
    }
}

impl History {
    /// History holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, at least one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`.
    pub fn get(&self, step: usize) -> Result<&Snapshot, EngineError> {
        self.snapshots.get(step).ok_or(EngineError::StepOutOfRange {
            step,
            len: self.snapshots.len(),
        })
    }

    /// All snapshots in move order.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Discards every snapshot after `step` and appends `snapshot`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub(crate) fn branch_from(&mut self, step: usize, snapshot: Snapshot) -> usize {
        let discarded = self.snapshots.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots");
        }
        self.snapshots.truncate(step + 1);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn snapshots_mut(&mut self) -> &mut Vec<Snapshot> {
        &mut self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Display order of the move list. Does not affect game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button text, e.g. `go to move #2 (1, 1)`.
    pub label: String,
    /// Whether this is the snapshot currently displayed.
    pub is_current: bool,
}
