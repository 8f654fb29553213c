//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark placed to reach snapshot `k` belongs to X when `k` is odd
/// and to O when `k` is even. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| match snapshot.last_move() {
                Some(pos) => {
                    snapshot.board().get(pos) == Square::Occupied(Player::for_step(step - 1))
                }
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
