//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Terminal game by default, plus a headless replay mode.

#![warn(missing_docs)]

mod cli;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use replay::ReplayOptions;
use strictly_tictactoe::{SortOrder, TuiConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        log_file: None,
    }) {
        Command::Play { config, log_file } => {
            let mut config = TuiConfig::load(config.as_deref()).context("Failed to load config")?;
            if let Some(log_file) = log_file {
                config = config.with_log_file(log_file);
            }
            tui::run_tui(config)
        }
        Command::Replay {
            moves,
            jump,
            json,
            descending,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let order = if descending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            replay::run(ReplayOptions {
                moves,
                jump,
                json,
                order,
            })
        }
    }
}
