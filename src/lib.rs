//! Tic-tac-toe with a headless turn engine.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the [`Game`] engine. The engine pushes
//!   [`GameEvent`]s to observers and never renders anything itself.
//! - **Move sources**: the computer opponent, a uniform random pick among
//!   empty squares.
//! - **Orchestrator**: the dispatch loop that applies [`Command`]s and
//!   schedules the computer's delayed move.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameMode, GameStatus, Player};
//!
//! let mut game = Game::new(GameMode::HumanVsHuman);
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).expect("legal move");
//! }
//! assert!(matches!(game.status(), GameStatus::Won { winner: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod orchestrator;

// Crate-level exports - Configuration
pub use config::{DEFAULT_THINK_DELAY, GameConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{Command, Orchestrator};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardExhausted, Game, GameEvent, GameMode, GameObserver, GameState, GameStatus,
    LineDirection, Move, MoveError, MoveOutcome, MoveSource, Player, Position,
    RandomMoveSource, Square, WinLine,
};
