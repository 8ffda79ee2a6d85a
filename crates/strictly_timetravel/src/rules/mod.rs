//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating and advancing a
//! board. Rules are separated from history storage so the controller can
//! apply them to whichever snapshot the cursor points at.

pub mod placement;
pub mod win;

pub use placement::place_mark;
pub use win::{LINES, WinningState, check_winner};
