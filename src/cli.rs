//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs here instead of the configured file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Square indices (0-8, row-major) or labels such as `center`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Jump to this history step after applying the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the engine state as JSON
        #[arg(long)]
        json: bool,

        /// List history newest first
        #[arg(long)]
        descending: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["strictly_tictactoe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from([
            "strictly_tictactoe",
            "replay",
            "0",
            "center",
            "--jump",
            "1",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Replay {
                moves, jump, json, descending,
            }) => {
                assert_eq!(moves, vec!["0", "center"]);
                assert_eq!(jump, Some(1));
                assert!(json);
                assert!(!descending);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["strictly_tictactoe", "replay"]).is_err());
    }
}
