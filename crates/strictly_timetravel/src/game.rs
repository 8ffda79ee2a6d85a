//! Game state controller: history, cursor, and the operations over them.

use super::action::{Move, MoveOutcome, MoveRejection};
use super::error::InvalidStep;
use super::history::{History, HistoryEntry};
use super::invariants::assert_invariants;
use super::move_list::{MoveListItem, MoveOrder};
use super::rules::place_mark;
use super::snapshot::{GameStatus, Snapshot};
use super::{Player, Position};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with time-travel.
///
/// Owns the recorded timeline and a cursor into it. The player to move is
/// always derived from the cursor, so jumping around the timeline can never
/// leave the turn out of step with the board.
#[derive(Debug, Clone, Default)]
pub struct Game {
    history: History,
    cursor: usize,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a game records at least the initial board.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the cursor is at the latest recorded entry.
    pub fn is_at_tip(&self) -> bool {
        self.cursor == self.history.tip()
    }

    /// The recorded timeline.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Entry recorded at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `step` is past the end of history.
    pub fn entry(&self, step: usize) -> Result<&HistoryEntry, InvalidStep> {
        self.history.get(step).ok_or(InvalidStep {
            step,
            len: self.history.len(),
        })
    }

    /// The player whose turn it is at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Plays the cell at `cell_index` (0-8, row-major) for the player to move.
    ///
    /// Rejected moves leave the game untouched. An accepted move made from a
    /// past step discards every entry after the cursor before it is recorded.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn apply_move(&mut self, cell_index: usize) -> MoveOutcome {
        match Position::from_index(cell_index) {
            Some(pos) => self.play(pos),
            None => {
                let reason = MoveRejection::OutOfBounds(cell_index);
                debug!(%reason, "Move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Plays `pos` for the player to move.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, pos: Position) -> MoveOutcome {
        let player = self.to_move();
        let visible = *self.current_entry().board();

        match place_mark(&visible, pos, player) {
            Ok(board) => {
                let mov = Move::new(player, pos);
                let discarded = self.history.tip() - self.cursor;
                self.cursor = self
                    .history
                    .branch(self.cursor, HistoryEntry::after(board, mov));
                assert_invariants(&self.history);
                info!(%mov, step = self.cursor, discarded, "Move accepted");
                MoveOutcome::Accepted(mov)
            }
            Err(reason) => {
                debug!(%reason, "Move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `step` is past the end of history; the
    /// cursor is left where it was.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), InvalidStep> {
        if step >= self.history.len() {
            let err = InvalidStep {
                step,
                len: self.history.len(),
            };
            warn!(%err, "Jump rejected");
            return Err(err);
        }

        debug!(from = self.cursor, to = step, "Jumping");
        self.cursor = step;
        Ok(())
    }

    /// Snapshot of the board at the cursor.
    pub fn current_snapshot(&self) -> Snapshot {
        Snapshot::new(*self.current_entry().board(), self.cursor)
    }

    /// Status line at the cursor.
    pub fn status(&self) -> GameStatus {
        self.current_snapshot().status()
    }

    /// Human-readable label for history entry `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `index` is past the end of history.
    pub fn move_description(&self, index: usize) -> Result<String, InvalidStep> {
        self.entry(index).map(|entry| entry.description(index))
    }

    /// One label per history entry, in step order.
    pub fn history_descriptions(&self) -> Vec<String> {
        self.history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| entry.description(step))
            .collect()
    }

    /// Move list rows in the requested order, marking the cursor's row.
    #[instrument(skip(self))]
    pub fn move_list(&self, order: MoveOrder) -> Vec<MoveListItem> {
        let mut items: Vec<MoveListItem> = self
            .history_descriptions()
            .into_iter()
            .enumerate()
            .map(|(step, description)| MoveListItem {
                step,
                description,
                is_current: step == self.cursor,
            })
            .collect();

        if order == MoveOrder::Descending {
            items.reverse();
        }
        items
    }

    /// Discards the whole timeline and starts over from the empty board.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    fn current_entry(&self) -> &HistoryEntry {
        &self.history.entries()[self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn played(cells: &[usize]) -> Game {
        let mut game = Game::new();
        for &cell in cells {
            assert!(game.apply_move(cell).is_accepted(), "cell {cell} rejected");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.len(), 1);
        assert_eq!(game.to_move(), Player::X);
        assert!(game.is_at_tip());
    }

    #[test]
    fn test_accepted_move_advances_cursor() {
        let mut game = Game::new();
        let outcome = game.apply_move(4);
        assert_eq!(
            outcome,
            MoveOutcome::Accepted(Move::new(Player::X, Position::Center))
        );
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.len(), 2);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(
            game.current_snapshot().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_out_of_bounds_cell_is_noop() {
        let mut game = played(&[4]);
        let before = game.clone();
        assert_eq!(
            game.apply_move(9),
            MoveOutcome::Rejected(MoveRejection::OutOfBounds(9))
        );
        assert_eq!(game.history(), before.history());
        assert_eq!(game.cursor(), before.cursor());
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = played(&[0, 4, 8]);
        let history = game.history().clone();
        game.jump_to(1).expect("recorded step");
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.history(), &history);
        assert_eq!(game.to_move(), Player::O);
        assert!(!game.is_at_tip());
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut game = played(&[0, 4]);
        assert_eq!(game.jump_to(3), Err(InvalidStep { step: 3, len: 3 }));
        assert_eq!(game.cursor(), 2);
    }

    #[test]
    fn test_move_description_out_of_range() {
        let game = Game::new();
        assert_eq!(game.move_description(0).as_deref(), Ok("Go to game start"));
        assert_eq!(game.move_description(1), Err(InvalidStep { step: 1, len: 1 }));
    }

    #[test]
    fn test_move_list_marks_cursor() {
        let mut game = played(&[0, 4, 8]);
        game.jump_to(1).expect("recorded step");

        let ascending = game.move_list(MoveOrder::Ascending);
        let steps: Vec<usize> = ascending.iter().map(|item| item.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3]);
        let current: Vec<usize> = ascending
            .iter()
            .filter(|item| item.is_current)
            .map(|item| item.step)
            .collect();
        assert_eq!(current, vec![1]);

        let descending = game.move_list(MoveOrder::Descending);
        let steps: Vec<usize> = descending.iter().map(|item| item.step).collect();
        assert_eq!(steps, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_restart() {
        let mut game = played(&[0, 4, 8]);
        game.restart();
        assert_eq!(game.len(), 1);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.current_snapshot().board(), &crate::Board::new());
    }
}
