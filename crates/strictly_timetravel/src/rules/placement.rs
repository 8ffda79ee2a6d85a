//! Move application: placing a mark on a board.

use super::super::action::{Move, MoveRejection};
use super::super::contracts::{Contract, PlacementContract};
use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Places `player`'s mark at `pos`, returning the resulting board.
///
/// The input board is never modified. The move is rejected if the board
/// already has a winner or if the square is taken.
///
/// # Errors
///
/// Returns [`MoveRejection::GameOver`] or [`MoveRejection::SquareOccupied`].
#[instrument]
pub fn place_mark(board: &Board, pos: Position, player: Player) -> Result<Board, MoveRejection> {
    let action = Move::new(player, pos);
    PlacementContract::pre(board, &action)?;

    let next = board.with(pos, Square::Occupied(player));

    debug_assert!(
        PlacementContract::post(board, &action, &next).is_ok(),
        "placement postcondition failed for {action}"
    );

    Ok(next)
}
