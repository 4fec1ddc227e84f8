//! Non-interactive replay: apply moves, optionally jump, print the game.

use crate::InputError;
use serde::Serialize;
use tictactoe_core::{Board, GameState, HistoryEntry, Mark, MoveOutcome, Position};
use tracing::{info, instrument, warn};

/// A move request that `apply_move` ignored.
#[derive(Debug, Clone, Serialize)]
pub struct IgnoredMove {
    /// Position of the move in the input list, counting from 1.
    pub move_number: usize,
    /// Why it was ignored.
    pub reason: String,
}

/// Result of replaying a move list.
#[derive(Debug, Clone)]
pub struct Replay {
    game: GameState,
    ignored: Vec<IgnoredMove>,
}

#[derive(Serialize)]
struct ReplayView<'a> {
    status: String,
    step: usize,
    next_mark: Mark,
    board: &'a Board,
    history: &'a [HistoryEntry],
    ignored: &'a [IgnoredMove],
}

/// Parses move tokens into positions.
///
/// Each token is a cell index (0-8) or a label such as `top-left`.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>, InputError> {
    tokens
        .iter()
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| {
                InputError::new(format!(
                    "'{}' is not a cell (use 0-8 or a label like top-left)",
                    token
                ))
            })
        })
        .collect()
}

/// Plays `moves` from a fresh game, then views `jump` if given.
///
/// Ignored moves are recorded rather than rejected. A `jump` outside the
/// history is rejected here so it never reaches [`GameState::jump_to`].
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> Result<Replay, InputError> {
    let mut game = GameState::new();
    let mut ignored = Vec::new();

    for (index, &position) in moves.iter().enumerate() {
        match game.apply_move(position) {
            MoveOutcome::Placed(_) => {}
            outcome => {
                warn!(index, %position, %outcome, "Move ignored");
                ignored.push(IgnoredMove {
                    move_number: index + 1,
                    reason: outcome.to_string(),
                });
            }
        }
    }

    if let Some(step) = jump {
        if !game.has_step(step) {
            return Err(InputError::new(format!(
                "Step {} is out of range (history has steps 0-{})",
                step,
                game.history_len() - 1
            )));
        }
        game.jump_to(step);
    }

    info!(step = game.step(), status = %game.status(), "Replay finished");
    Ok(Replay { game, ignored })
}

impl Replay {
    /// The replayed game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Moves that were ignored, in input order.
    pub fn ignored(&self) -> &[IgnoredMove] {
        &self.ignored
    }

    /// Board, status and move list as plain text.
    ///
    /// The viewed step is marked with `>` in the move list.
    pub fn render_text(&self, show_move_details: bool) -> String {
        let mut out = String::new();
        out.push_str(&self.game.current_board().display());
        out.push_str("\n\n");
        out.push_str(&self.game.status().to_string());
        out.push_str("\n\nMoves:\n");

        for (step, entry) in self.game.history().iter().enumerate() {
            let marker = if step == self.game.step() { '>' } else { ' ' };
            let text = if show_move_details {
                entry.describe(step)
            } else {
                HistoryEntry::label(step)
            };
            out.push_str(&format!("{} {}\n", marker, text));
        }

        for ignored in &self.ignored {
            out.push_str(&format!(
                "Ignored move {}: {}\n",
                ignored.move_number,
                ignored.reason
            ));
        }
        out
    }

    /// The game as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let view = ReplayView {
            status: self.game.status().to_string(),
            step: self.game.step(),
            next_mark: self.game.next_mark(),
            board: self.game.current_board(),
            history: self.game.history(),
            ignored: &self.ignored,
        };
        serde_json::to_string_pretty(&view)
    }
}
