//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use strictly_timetravel::{Game, MoveListItem, MoveOrder, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds only presentation state; every rule decision is made by [`Game`].
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    order: MoveOrder,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application listing moves in `order`.
    #[instrument]
    pub fn new(order: MoveOrder) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            order,
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// History step highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move list rows in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        self.game.move_list(self.order)
    }

    /// Feedback from the last rejected action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = c.to_digit(10).and_then(|d| Position::from_index(d as usize - 1)) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Char('j') => self.shift_selection(1),
            KeyCode::Char('k') => self.shift_selection(-1),
            KeyCode::Char('g') => self.jump_to_selected(),
            KeyCode::Char('s') => {
                self.order = self.order.toggle();
                debug!(order = ?self.order, "Move list order toggled");
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.selected = 0;
                self.message = None;
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.game.play(pos) {
            MoveOutcome::Accepted(_) => {
                self.selected = self.game.cursor();
                self.message = None;
            }
            MoveOutcome::Rejected(reason) => self.message = Some(reason.to_string()),
        }
    }

    fn shift_selection(&mut self, delta: isize) {
        let rows = self.move_list();
        let Some(index) = rows.iter().position(|row| row.step == self.selected) else {
            return;
        };
        let target = index.saturating_add_signed(delta).min(rows.len() - 1);
        self.selected = rows[target].step;
    }

    fn jump_to_selected(&mut self) {
        match self.game.jump_to(self.selected) {
            Ok(()) => self.message = None,
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}
