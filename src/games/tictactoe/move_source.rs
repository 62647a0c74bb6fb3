//! Computer opponent: picks which cell to play next.

use super::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Raised when a move is requested from a board with no empty squares.
///
/// The orchestrator only asks while the game is active, so seeing this
/// means the engine's invariants were broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No empty squares left to choose from")]
pub struct BoardExhausted;

impl std::error::Error for BoardExhausted {}

/// Decides the computer's next move.
pub trait MoveSource: Send {
    /// Chooses one of the empty squares on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardExhausted`] if the board is full.
    fn choose_move(&mut self, board: &Board) -> Result<Position, BoardExhausted>;
}

/// Picks uniformly at random among the empty squares. No strategy.
#[derive(Debug, Clone)]
pub struct RandomMoveSource {
    rng: StdRng,
}

impl RandomMoveSource {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MoveSource for RandomMoveSource {
    #[instrument(skip_all)]
    fn choose_move(&mut self, board: &Board) -> Result<Position, BoardExhausted> {
        let empty = board.empty_positions();
        let choice = empty.choose(&mut self.rng).copied().ok_or(BoardExhausted)?;
        debug!(position = %choice, candidates = empty.len(), "Computer chose position");
        Ok(choice)
    }
}
