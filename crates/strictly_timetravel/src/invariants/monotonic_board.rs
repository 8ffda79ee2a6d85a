//! Monotonic board invariant: marks are never erased along a timeline.

use super::super::{History, Position, Square};
use super::Invariant;

/// Invariant: Once a square is occupied, every later board in the timeline
/// holds the same mark there.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        history.entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            Position::ALL
                .into_iter()
                .all(|pos| before.get(pos) == Square::Empty || before.get(pos) == after.get(pos))
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
