//! Application state and key handling.

use super::input::{digit_square, move_cursor};
use crossterm::event::KeyCode;
use strictly_tictactoe::{GameEngine, MoveDisposition, MoveEntry, Position, SortOrder, TuiConfig};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the cell cursor.
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Main application state.
///
/// Holds the single engine instance plus display-only state: cell cursor,
/// list selection and sort order. None of it feeds back into the engine.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    selected: Position,
    focus: Focus,
    sort_order: SortOrder,
    history_selection: usize,
    highlight_winning_line: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            selected: Position::Center,
            focus: Focus::Board,
            sort_order: *config.sort_order(),
            history_selection: 0,
            highlight_winning_line: *config.highlight_winning_line(),
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the board cursor.
    pub fn selected(&self) -> Position {
        self.selected
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Display order of the move list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Index of the selected row in the displayed move list.
    pub fn history_selection(&self) -> usize {
        self.history_selection
    }

    /// Whether to color the winning line.
    pub fn highlight_winning_line(&self) -> bool {
        self.highlight_winning_line
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list in the current display order.
    pub fn entries(&self) -> Vec<MoveEntry> {
        self.engine.move_entries(self.sort_order)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('n') => self.restart(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(index) = digit_square(key) {
            if let Some(pos) = Position::from_index(index) {
                self.selected = pos;
            }
            self.play(index);
            return;
        }
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.selected.to_index()),
            _ => self.selected = move_cursor(self.selected, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.engine.len() - 1;
        match key {
            KeyCode::Up => self.history_selection = self.history_selection.saturating_sub(1),
            KeyCode::Down => self.history_selection = (self.history_selection + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selection(),
            _ => {}
        }
    }

    fn play(&mut self, index: usize) {
        match self.engine.apply_move(index) {
            MoveDisposition::Accepted { played, .. } => {
                debug!(%played, "Move applied to UI state");
                self.message = None;
                self.sync_history_selection();
            }
            MoveDisposition::Rejected(reason) => {
                self.message = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selection(&mut self) {
        let Some(entry) = self.entries().into_iter().nth(self.history_selection) else {
            return;
        };
        match self.engine.jump_to(entry.step) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.sync_history_selection();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn toggle_sort(&mut self) {
        let step = self
            .entries()
            .get(self.history_selection)
            .map(|entry| entry.step);
        self.sort_order = self.sort_order.toggle();
        debug!(order = self.sort_order.label(), "Sort order toggled");
        if let Some(step) = step {
            self.history_selection = self.row_of_step(step);
        }
    }

    fn sync_history_selection(&mut self) {
        self.history_selection = self.row_of_step(self.engine.cursor());
    }

    fn row_of_step(&self, step: usize) -> usize {
        match self.sort_order {
            SortOrder::Ascending => step,
            SortOrder::Descending => self.engine.len() - 1 - step,
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine = GameEngine::new();
        self.selected = Position::Center;
        self.history_selection = 0;
        self.message = None;
    }
}
