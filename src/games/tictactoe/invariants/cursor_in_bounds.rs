//! Cursor invariant: the cursor always names a recorded snapshot.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= cursor < history length`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.cursor() < engine.len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}
