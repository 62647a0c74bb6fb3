//! The turn engine.
//!
//! [`Game`] owns one [`GameState`] and is the only thing allowed to mutate
//! it. Every state change is pushed to subscribed [`GameObserver`]s, so a
//! display surface can render without the engine knowing it exists.

use super::action::{Move, MoveError};
use super::rules::{WinLine, is_full, winning_line};
use super::types::{Board, GameMode, GameState, GameStatus, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Notifications pushed to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board was reset; rendered marks and strike lines should go.
    Cleared {
        /// Generation the game was reset into.
        generation: u64,
    },
    /// A mark was placed.
    MoveApplied(Move),
    /// Board, turn or status changed.
    StateChanged(GameState),
    /// The computer is due to move once its thinking delay elapses.
    ComputerTurn {
        /// Generation the move belongs to.
        generation: u64,
    },
}

/// Receives [`GameEvent`]s from a [`Game`].
pub trait GameObserver: Send {
    /// Called synchronously for every event, in order.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// What an accepted move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play goes on.
    Continue {
        /// Player to move next.
        next: Player,
        /// True when the next move belongs to the computer.
        computer_to_move: bool,
    },
    /// The mover completed a line.
    Won {
        /// The mover.
        winner: Player,
        /// The line completed.
        line: WinLine,
    },
    /// The board filled without a line.
    Tied,
}

/// Tic-tac-toe game engine.
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Creates a new game without notifying anyone.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for all future events.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Clears the board and starts over in `mode` with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        self.state.restart(mode);
        info!(generation = self.state.generation(), %mode, "Game reset");

        self.emit(GameEvent::Cleared {
            generation: self.state.generation(),
        });
        self.emit(GameEvent::StateChanged(self.state.clone()));
    }

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// # Errors
    ///
    /// Refuses out-of-range indices, occupied squares and finished games.
    /// A refused move changes nothing and emits nothing.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange { index })?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// See [`Game::apply_move`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if !self.state.status().is_active() {
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied { position: pos });
        }

        let mover = self.state.current_player();
        self.state.mark(pos);
        debug!(position = %pos, player = %mover, "Move applied");
        self.emit(GameEvent::MoveApplied(Move::new(mover, pos)));

        let outcome = if let Some(line) = winning_line(self.state.board(), mover) {
            info!(winner = %mover, line = ?line.indices(), "Game won");
            self.state.set_status(GameStatus::Won {
                winner: mover,
                line,
            });
            MoveOutcome::Won {
                winner: mover,
                line,
            }
        } else if is_full(self.state.board()) {
            info!("Game tied");
            self.state.set_status(GameStatus::Tied);
            MoveOutcome::Tied
        } else {
            self.state.pass_turn();
            MoveOutcome::Continue {
                next: self.state.current_player(),
                computer_to_move: self.is_computer_turn(),
            }
        };

        self.emit(GameEvent::StateChanged(self.state.clone()));
        if let MoveOutcome::Continue {
            computer_to_move: true,
            ..
        } = outcome
        {
            self.emit(GameEvent::ComputerTurn {
                generation: self.state.generation(),
            });
        }

        Ok(outcome)
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns an owned copy of the board.
    pub fn board_snapshot(&self) -> Board {
        self.state.board().clone()
    }

    /// Returns the full state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the mode chosen at the last reset.
    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    /// Returns the reset generation.
    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    /// True while the game is active and the computer holds the turn.
    pub fn is_computer_turn(&self) -> bool {
        self.state.status().is_active()
            && self.state.mode().computer_side() == Some(self.state.current_player())
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
