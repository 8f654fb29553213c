//! Headless replay: apply moves and print the resulting game.

use anyhow::{Context, Result};
use strictly_tictactoe::{GameEngine, MoveDisposition, Position, SortOrder};
use tracing::{info, instrument, warn};

/// Options for a replay run.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    /// Moves as square indices or labels.
    pub moves: Vec<String>,
    /// Optional history step to jump to afterwards.
    pub jump: Option<usize>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// History display order.
    pub order: SortOrder,
}

/// Builds an engine from the requested moves.
///
/// Unparseable moves are an error; rejected moves are reported and skipped,
/// exactly as a click on an occupied square would be ignored.
#[instrument(skip_all, fields(moves = options.moves.len()))]
pub fn build_engine(options: &ReplayOptions) -> Result<GameEngine> {
    let mut engine = GameEngine::new();
    for raw in &options.moves {
        let position = Position::from_label_or_number(raw)
            .with_context(|| format!("Not a square: {:?}", raw))?;
        match engine.play(position) {
            MoveDisposition::Accepted { step, played } => {
                info!(step, %played, "Replayed move");
            }
            MoveDisposition::Rejected(reason) => {
                warn!(%reason, %position, "Move ignored");
                eprintln!("ignored {}: {}", position, reason);
            }
        }
    }

    if let Some(step) = options.jump {
        engine
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }
    Ok(engine)
}

/// Renders the engine as plain text.
pub fn render_text(engine: &GameEngine, order: SortOrder) -> String {
    let mut out = String::new();
    out.push_str(&engine.current_board().to_string());
    out.push_str("\n\n");
    out.push_str(&engine.status_line());
    out.push('\n');
    let line: Vec<String> = engine
        .outcome()
        .winning_line()
        .iter()
        .map(|p| p.to_index().to_string())
        .collect();
    if !line.is_empty() {
        out.push_str(&format!("Winning line: [{}]\n", line.join(", ")));
    }
    out.push_str(&format!("\nHistory ({}):\n", order.label()));
    for entry in engine.move_entries(order) {
        let marker = if entry.is_current { ">" } else { " " };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step, entry.label));
    }
    out
}

/// Runs the replay command.
#[instrument(skip_all)]
pub fn run(options: ReplayOptions) -> Result<()> {
    let engine = build_engine(&options)?;
    if options.json {
        let json = serde_json::to_string_pretty(&engine).context("Failed to serialize game")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&engine, options.order));
    }
    Ok(())
}
