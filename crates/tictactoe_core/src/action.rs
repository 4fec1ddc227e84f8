//! Move types for tic-tac-toe.
//!
//! A [`Move`] records which mark went where. [`MoveOutcome`] tells the caller
//! what `apply_move` did with a request; ignored requests are ordinary
//! outcomes, not errors.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    mark: Mark,
    /// Where it was placed.
    position: Position,
}

impl Move {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.mark, self.position.label())
    }
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot appended.
    #[display("{_0}")]
    Placed(Move),

    /// Ignored: the current board already has a winner.
    #[display("Game is already won by {_0}")]
    IgnoredGameOver(Mark),

    /// Ignored: the square is taken.
    #[display("{_0} is already occupied")]
    IgnoredOccupied(Position),
}

impl MoveOutcome {
    /// True if the move changed the game state.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
