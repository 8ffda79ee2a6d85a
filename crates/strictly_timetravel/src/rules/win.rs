//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningState {
    winner: Player,
    line: [Position; 3],
}

impl WinningState {
    /// Returns the winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the three positions of the winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are checked in [`LINES`] order and the first complete line is
/// returned, so a board with two complete lines always reports the same one.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningState> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(winner) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(WinningState { winner, line });
        }
    }

    None
}
