//! Read-only views handed to the rendering collaborator.

use super::rules::{WinningState, check_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};

/// Ply count at which a game without a winner is drawn.
///
/// Every accepted move fills exactly one square, so reaching this ply means
/// the board is full.
pub const DRAW_PLY: usize = 9;

/// The board at the cursor together with its win analysis.
///
/// The win analysis is always derived from the board; a deserialized
/// snapshot recomputes it and ignores any recorded `winning_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord")]
pub struct Snapshot {
    board: Board,
    winning_state: Option<WinningState>,
    cursor: usize,
}

#[derive(Deserialize)]
struct SnapshotRecord {
    board: Board,
    cursor: usize,
}

impl From<SnapshotRecord> for Snapshot {
    fn from(record: SnapshotRecord) -> Self {
        Self::new(record.board, record.cursor)
    }
}

impl Snapshot {
    /// Builds a snapshot of `board` recorded at step `cursor`.
    pub fn new(board: Board, cursor: usize) -> Self {
        Self {
            board,
            winning_state: check_winner(&board),
            cursor,
        }
    }

    /// The board at the cursor.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The completed line, if any.
    pub fn winning_state(&self) -> Option<WinningState> {
        self.winning_state
    }

    /// The step this snapshot was taken at.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The player whose turn it is at this step.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.cursor)
    }

    /// Whether `pos` should be highlighted as part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_state.is_some_and(|state| state.contains(pos))
    }

    /// Derives the game status at this step.
    pub fn status(&self) -> GameStatus {
        match self.winning_state {
            Some(state) => GameStatus::Winner(state.winner()),
            None if self.cursor == DRAW_PLY => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }
}

/// Status line for the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player has completed a line.
    #[display("winner = {}", _0)]
    Winner(Player),
    /// All nine plies made without a winner.
    #[display("draw")]
    Draw,
    /// Game continues with this player.
    #[display("next player = {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true once the game can take no more moves.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}
