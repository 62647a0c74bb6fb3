//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine in
//! [`game`](super::game) calls these after every accepted move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineDirection, WinLine, winning_line};
