//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tictactoe::{GameConfig, GameMode};

/// Tic-tac-toe in the terminal, against a friend or a random computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent for the first game (toggle later with 'm')
    #[arg(short, long, value_enum, default_value_t = GameMode::HumanVsHuman)]
    pub mode: GameMode,

    /// Computer thinking delay in milliseconds
    #[arg(long, default_value = "700")]
    pub think_ms: u64,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal is taken by the board)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Collects the game settings.
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.mode, Duration::from_millis(self.think_ms), self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        let config = cli.config();
        assert_eq!(*config.mode(), GameMode::HumanVsHuman);
        assert_eq!(*config.think_delay(), tictactoe::DEFAULT_THINK_DELAY);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_computer_mode_with_seed() {
        let cli = Cli::parse_from(["tictactoe", "--mode", "computer", "--think-ms", "500", "--seed", "7"]);
        let config = cli.config();
        assert_eq!(*config.mode(), GameMode::HumanVsComputer);
        assert_eq!(*config.think_delay(), Duration::from_millis(500));
        assert_eq!(*config.seed(), Some(7));
    }
}
