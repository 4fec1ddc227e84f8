//! Board snapshots kept by the game history.

use super::{Board, Move};
use serde::{Deserialize, Serialize};

/// One immutable snapshot in the game history.
///
/// The first entry holds the empty board and no move. Every later entry holds
/// the board produced by exactly one [`Move`] on the entry before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    board: Board,
    placed: Option<Move>,
}

impl HistoryEntry {
    /// The starting entry: empty board, no move.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot, if any.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }

    /// Move-list text for this entry at `step`.
    pub fn label(step: usize) -> String {
        if step == 0 {
            "Game start".to_string()
        } else {
            format!("Move #{}", step)
        }
    }

    /// Move-list text including the move itself, e.g. `Move #3 (X at Top-right)`.
    pub fn describe(&self, step: usize) -> String {
        match self.placed {
            Some(mv) => format!("{} ({})", Self::label(step), mv),
            None => Self::label(step),
        }
    }
}
