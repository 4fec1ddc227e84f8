//! Tic-tac-toe game logic with time travel.
//!
//! The game keeps every board snapshot since the start. Any earlier snapshot
//! can be viewed with [`GameState::jump_to`]; playing a move from there
//! discards the snapshots that came after it.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Position};
//!
//! let mut game = GameState::new();
//! for pos in [0, 4, 1, 3, 2] {
//!     game.apply_move(Position::from_index(pos).unwrap());
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.jump_to(0);
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome};
pub use game::GameState;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::{check_winner, is_full, winning_line};
pub use types::{Board, GameStatus, Mark, Square};
