//! Headless tic-tac-toe: board, rules, turn engine and computer opponent.

mod action;
mod game;
mod move_source;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameEvent, GameObserver, MoveOutcome};
pub use move_source::{BoardExhausted, MoveSource, RandomMoveSource};
pub use position::Position;
pub use rules::{LineDirection, WinLine, is_full, winning_line};
pub use types::{Board, GameMode, GameState, GameStatus, Player, Square};
