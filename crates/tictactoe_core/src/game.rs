//! Game state with a jumpable history of board snapshots.

use super::rules::check_winner;
use super::{Board, GameStatus, HistoryEntry, Mark, Move, MoveOutcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game with time travel.
///
/// Holds every board snapshot since the start and the step currently being
/// viewed. The mark to move next is derived from the step's parity and the
/// winner is derived from the viewed board; neither is stored.
///
/// Mutation happens only through [`GameState::apply_move`] and
/// [`GameState::jump_to`]. Callers re-read [`GameState::current_board`] and
/// [`GameState::status`] afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
}

impl GameState {
    /// Creates a new game with only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
        }
    }

    /// Places the next mark at `position`.
    ///
    /// Does nothing if the viewed board already has a winner or the square
    /// is occupied; the returned [`MoveOutcome`] says which. Otherwise every
    /// entry after the current step is discarded, the new snapshot is
    /// appended, and the current step moves to it.
    #[instrument(skip(self), fields(step = self.step, history_len = self.history.len()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        let board = *self.current_board();

        if let Some(winner) = check_winner(&board) {
            debug!(%winner, "Move ignored, game already won");
            return MoveOutcome::IgnoredGameOver(winner);
        }

        if !board.is_empty(position) {
            debug!("Move ignored, square occupied");
            return MoveOutcome::IgnoredOccupied(position);
        }

        let mv = Move::new(self.next_mark(), position);
        let discarded = self.history.len() - (self.step + 1);
        self.history.truncate(self.step + 1);
        self.history
            .push(HistoryEntry::new(board.with_mark(position, mv.mark()), Some(mv)));
        self.step = self.history.len() - 1;

        debug!(%mv, discarded, new_step = self.step, "Move applied");
        MoveOutcome::Placed(mv)
    }

    /// Views the snapshot at `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not a valid history index. Shells validate steps
    /// before calling this.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "history step {} out of range (history has {} entries)",
            step,
            self.history.len()
        );
        self.step = step;
        debug!(next = %self.next_mark(), "Jumped to step");
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Winner on the current board, or the mark to move next.
    pub fn status(&self) -> GameStatus {
        match check_winner(self.current_board()) {
            Some(winner) => GameStatus::Winner(winner),
            None => GameStatus::NextPlayer(self.next_mark()),
        }
    }

    /// Mark that moves next: X on even steps, O on odd ones.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Currently viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// All snapshots, starting with the empty board.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of snapshots; always at least one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// True if `step` names an existing snapshot.
    pub fn has_step(&self, step: usize) -> bool {
        step < self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &i in moves {
            let pos = Position::from_index(i).expect("index in range");
            assert!(game.apply_move(pos).is_placed(), "move {i} should apply");
        }
        game
    }

    #[test]
    fn test_new_game_starts_empty() {
        let game = GameState::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
    }

    #[test]
    fn test_marks_alternate() {
        let game = play(&[4, 0]);
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Mark::O));
        assert_eq!(game.next_mark(), Mark::X);
        assert_eq!(game.step(), 2);
    }

    #[test]
    fn test_stored_snapshots_are_not_rewritten() {
        let game = play(&[0, 4, 8]);
        let filled: Vec<_> = game.history().iter().map(|e| e.board().filled()).collect();
        assert_eq!(filled, vec![0, 1, 2, 3]);
        assert_eq!(*game.history()[0].board(), Board::new());
        assert!(game.history()[1].board().is_empty(Position::Center));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_jump_past_end_panics() {
        let mut game = play(&[0]);
        game.jump_to(2);
    }
}
