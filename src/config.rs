//! Launch settings for a game session.

use crate::games::tictactoe::GameMode;
use derive_getters::Getters;
use std::time::Duration;

/// How long the computer "thinks" before its move lands.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(700);

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct GameConfig {
    /// Mode for the first game; later games take the mode from the selector.
    mode: GameMode,
    /// Delay before the computer's move is applied.
    think_delay: Duration,
    /// Seed for the computer's random picks.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::default(), DEFAULT_THINK_DELAY, None)
    }
}
