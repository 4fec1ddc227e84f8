//! Application state and key handling.

use crate::Settings;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use tictactoe_core::{GameState, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Which part of the screen receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys select a history entry.
    History,
}

impl Focus {
    /// Toggles between board and history.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the only [`GameState`]. After every key the screen is redrawn from
/// the game's current board and status.
#[derive(Debug)]
pub struct App {
    game: GameState,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(settings))]
    pub fn new(settings: Settings) -> Self {
        Self {
            game: GameState::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Display settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused area.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History entry highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the draw/input loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| crate::ui::draw(frame, self))?;

            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus, step = self.game.step()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Digit keys play a cell whichever area has focus.
        if let Some(pos) = digit_cell(key.code) {
            self.cursor = pos;
            self.play(pos);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.step();
            }
            KeyCode::Char('[') => self.step_by(-1),
            KeyCode::Char(']') => self.step_by(1),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history_len() - 1;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        let outcome = self.game.apply_move(pos);
        debug!(%outcome, "Move requested");
        self.message = match outcome {
            MoveOutcome::Placed(_) => None,
            ignored => Some(ignored.to_string()),
        };
        self.selected = self.game.step();
    }

    fn jump(&mut self, step: usize) {
        if !self.game.has_step(step) {
            return;
        }
        self.game.jump_to(step);
        self.selected = step;
        self.message = None;
    }

    fn step_by(&mut self, delta: isize) {
        if let Some(step) = self.game.step().checked_add_signed(delta) {
            self.jump(step);
        }
    }

    /// Starts a new game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.selected = 0;
        self.focus = Focus::Board;
        self.message = Some("New game".to_string());
    }
}
