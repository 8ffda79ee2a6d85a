//! Recorded timeline of board snapshots.

use super::{Board, Move};
use serde::Serialize;

/// Description shown for the initial entry.
pub const GAME_START: &str = "Go to game start";

/// One recorded board and the move that produced it.
///
/// The initial entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The entry every timeline starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after(board: Board, mov: Move) -> Self {
        Self {
            board,
            last_move: Some(mov),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this board, `None` for the initial entry.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Human-readable label for the move list.
    pub fn description(&self, step: usize) -> String {
        match self.last_move {
            Some(mov) => format!(
                "Go to move #{} : Player {} played row - {} col - {}",
                step,
                mov.player,
                mov.position.row(),
                mov.position.col()
            ),
            None => GAME_START.to_string(),
        }
    }
}

/// Ordered history entries. Entry 0 is the empty board, entry n the board
/// after n moves.
///
/// A history always holds at least the initial entry. Entries are never
/// edited; the only way to drop entries is [`History::branch`], which
/// discards the suffix after a step before appending a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in step order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Index of the last entry.
    pub fn tip(&self) -> usize {
        self.entries.len() - 1
    }

    /// Keeps entries `0..=step`, then appends `entry`.
    ///
    /// Returns the step of the appended entry.
    pub(crate) fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        self.entries.truncate(step + 1);
        self.entries.push(entry);
        self.tip()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn entry(board: Board, player: Player, pos: Position) -> HistoryEntry {
        HistoryEntry::after(board.with(pos, Square::Occupied(player)), Move::new(player, pos))
    }

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.tip(), 0);
        assert_eq!(history.get(0), Some(&HistoryEntry::initial()));
    }

    #[test]
    fn test_branch_discards_suffix() {
        let mut history = History::new();
        let first = entry(Board::new(), Player::X, Position::Center);
        history.branch(0, first);
        let second = entry(*first.board(), Player::O, Position::TopLeft);
        history.branch(1, second);
        assert_eq!(history.len(), 3);

        let replacement = entry(Board::new(), Player::X, Position::BottomRight);
        assert_eq!(history.branch(0, replacement), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&replacement));
        assert_eq!(history.get(2), None);
    }

    #[test]
    fn test_descriptions() {
        let mov = entry(Board::new(), Player::O, Position::MiddleRight);
        assert_eq!(HistoryEntry::initial().description(0), GAME_START);
        assert_eq!(
            mov.description(2),
            "Go to move #2 : Player O played row - 2 col - 3"
        );
    }
}
