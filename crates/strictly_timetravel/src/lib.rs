//! Strictly Timetravel - tic-tac-toe with move history and time-travel
//!
//! The engine owns a recorded timeline of boards and a cursor into it.
//! A rendering collaborator reads [`Snapshot`]s and [`GameStatus`] and
//! forwards cell clicks ([`Game::apply_move`]) and history jumps
//! ([`Game::jump_to`]) back to the engine.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection and mark placement
//! - **Contracts**: preconditions and postconditions for placement
//! - **Invariants**: properties of the recorded timeline, checked after every move
//! - **Game**: the controller owning history and cursor
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! game.jump_to(0).expect("step 0 is always recorded");
//! assert_eq!(game.status().to_string(), "next player = X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod error;
mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{Move, MoveOutcome, MoveRejection};
pub use error::InvalidStep;
pub use game::Game;
pub use history::{GAME_START, History, HistoryEntry};
pub use move_list::{MoveListItem, MoveOrder};
pub use position::Position;
pub use rules::{WinningState, check_winner, place_mark};
pub use snapshot::{DRAW_PLY, GameStatus, Snapshot};
pub use types::{Board, Player, Square};
