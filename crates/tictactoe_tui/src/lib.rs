//! Terminal shell for tic-tac-toe with time travel.
//!
//! Two ways to drive a [`tictactoe_core::GameState`]:
//!
//! - **play**: an interactive terminal UI with a board cursor and a move
//!   list you can jump through.
//! - **replay**: applies a list of moves, optionally jumps to a step, and
//!   prints the board, status and history as text or JSON.
//!
//! Both re-read the board and status from the game after every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod replay;
mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use error::InputError;
pub use input::{digit_cell, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{IgnoredMove, Replay, parse_moves, replay};
pub use ui::draw;
