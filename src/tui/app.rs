//! Display state folded from engine events.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe::{Command, GameEvent, GameMode, GameState, Position};
use tracing::debug;

/// Main application state.
#[derive(Debug)]
pub struct App {
    state: GameState,
    cursor: Position,
    selected_mode: GameMode,
    thinking: bool,
}

impl App {
    /// Creates a new application showing an empty board.
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
            cursor: Position::Center,
            selected_mode: mode,
            thinking: false,
        }
    }

    /// Latest game state from the engine.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Mode the next restart will use.
    pub fn selected_mode(&self) -> GameMode {
        self.selected_mode
    }

    /// Status line text.
    pub fn status_message(&self) -> String {
        if self.thinking {
            "Computer is thinking...".to_string()
        } else {
            self.state.status_message()
        }
    }

    /// Handles a game event from the engine.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Cleared { .. } => {
                self.thinking = false;
            }
            GameEvent::MoveApplied(mv) => {
                debug!(%mv, "Move applied to UI state");
                self.thinking = false;
            }
            GameEvent::StateChanged(state) => {
                self.state = state;
            }
            GameEvent::ComputerTurn { .. } => {
                self.thinking = true;
            }
        }
    }

    /// Translates a key press into a command for the orchestrator.
    ///
    /// Cursor movement and mode toggling stay local and return `None`.
    pub fn on_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('r') => Some(Command::Restart(self.selected_mode)),
            KeyCode::Char('m') => {
                self.selected_mode = self.selected_mode.toggle();
                debug!(mode = %self.selected_mode, "Mode selected for next game");
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select(self.cursor.to_index())),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            other => digit_position(other).map(|pos| {
                self.cursor = pos;
                Command::Select(pos.to_index())
            }),
        }
    }
}
