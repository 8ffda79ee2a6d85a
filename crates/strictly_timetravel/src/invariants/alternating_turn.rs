//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{History, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Only the initial entry lacks a move, and the move recorded at step `n`
/// belongs to the player whose turn it was after `n - 1` plies.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .all(|(step, entry)| match (step, entry.last_move()) {
                (0, None) => true,
                (0, Some(_)) | (_, None) => false,
                (step, Some(mov)) => mov.player == Player::for_ply(step - 1),
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
