//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveRejection};
use super::invariants::InvariantViolation;
use super::rules::check_winner;
use super::{Board, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, action, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveRejection> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: Nobody has won yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects any move on a board that already has a completed line.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveRejection> {
        match check_winner(board) {
            Some(state) => Err(MoveRejection::GameOver(state.winner())),
            None => Ok(()),
        }
    }
}

/// Composite precondition: A move is legal if nobody has won and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveRejection> {
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark on a board.
///
/// Preconditions:
/// - No winner on the board
/// - Square must be empty
///
/// Postconditions:
/// - The target square holds the mover's mark
/// - Every other square is unchanged
pub struct PlacementContract;

impl Contract<Board, Move> for PlacementContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, action: &Move, after: &Board) -> Result<(), InvariantViolation> {
        if after.get(action.position) != Square::Occupied(action.player) {
            warn!(%action, "Placed square does not hold the mover's mark");
            return Err(InvariantViolation::new(format!(
                "Square {} does not hold {}",
                action.position, action.player
            )));
        }

        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| *pos != action.position && before.get(*pos) != after.get(*pos))
            .collect();

        if changed.is_empty() {
            Ok(())
        } else {
            warn!(?changed, "Placement touched other squares");
            Err(InvariantViolation::new(format!(
                "Placement changed untouched squares: {:?}",
                changed
            )))
        }
    }
}
