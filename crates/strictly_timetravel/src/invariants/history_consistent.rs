//! History consistency invariant: every board is its predecessor plus one move.

use super::super::{Board, History, Square};
use super::Invariant;

/// Invariant: Replaying the recorded moves reproduces every recorded board.
///
/// Entry 0 is the empty board, and entry `n` equals entry `n - 1` with the
/// recorded move's mark placed on a previously empty square.
pub struct HistoryConsistentInvariant;

impl Invariant<History> for HistoryConsistentInvariant {
    fn holds(history: &History) -> bool {
        let entries = history.entries();
        if entries.first().map(|e| *e.board()) != Some(Board::new()) {
            return false;
        }

        entries.windows(2).all(|pair| {
            let before = pair[0].board();
            match pair[1].last_move() {
                Some(mov) => {
                    before.is_empty(mov.position)
                        && before.with(mov.position, Square::Occupied(mov.player))
                            == *pair[1].board()
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each board is its predecessor plus the recorded move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Game, Move, Player, Position};

    #[test]
    fn test_new_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&History::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for cell in [0, 4, 1, 7, 2] {
            game.apply_move(cell);
        }
        assert!(HistoryConsistentInvariant::holds(game.history()));
    }

    #[test]
    fn test_board_disagreeing_with_move_violates() {
        let board = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        let history = History::from_entries(vec![
            HistoryEntry::initial(),
            HistoryEntry::after(board, Move::new(Player::X, Position::Center)),
        ]);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
