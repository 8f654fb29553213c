//! Strictly Tic-Tac-Toe - a tic-tac-toe engine with time travel
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over any board
//! - **Engine**: snapshot history with a cursor; jumping back and playing
//!   again branches the game from that point
//! - **Config**: settings for the terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 1, 4, 2, 8] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome().winner(), Some(Player::X));
//!
//! engine.jump_to(0).unwrap();
//! engine.apply_move(4);
//! assert_eq!(engine.len(), 2);
//! assert_eq!(engine.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, EngineError, GameEngine, Move, MoveDisposition, MoveEntry, Outcome, Player,
    Position, RejectReason, SortOrder, Snapshot, Square, WinningLine, evaluate_outcome,
};
