//! Command-line interface for the tic-tac-toe shell.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Moves as cell indices (0-8) or labels such as "top-left"
        moves: Vec<String>,

        /// History step to view after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
