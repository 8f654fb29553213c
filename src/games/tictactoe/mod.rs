//! Tic-tac-toe: rules, move history and the time-travel engine.

mod action;
mod engine;
mod error;
mod history;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveDisposition, RejectReason};
pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{History, MoveEntry, SortOrder, Snapshot};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{WinningLine, evaluate_outcome};
pub use types::{Board, Player, Square};
