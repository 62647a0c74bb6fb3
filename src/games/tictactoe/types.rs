//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::WinLine;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, played by the computer in
    /// [`GameMode::HumanVsComputer`]).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(super) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Who sits across from the human holding X.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    clap::ValueEnum,
)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[display("Human vs Human")]
    #[value(name = "human")]
    HumanVsHuman,
    /// The computer plays O with random moves.
    #[display("Human vs Computer")]
    #[value(name = "computer")]
    HumanVsComputer,
}

impl GameMode {
    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::HumanVsHuman => Self::HumanVsComputer,
            Self::HumanVsComputer => Self::HumanVsHuman,
        }
    }

    /// The mark the computer plays, if any.
    pub fn computer_side(self) -> Option<Player> {
        match self {
            Self::HumanVsHuman => None,
            Self::HumanVsComputer => Some(Player::O),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Active,
    /// Game ended in a win.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no line.
    Tied,
}

impl GameStatus {
    /// Returns true while moves are still accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// The winning line, if the game was won.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Snapshot of everything a display surface needs to render a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Mode chosen at the last reset.
    mode: GameMode,
    /// Bumped on every reset.
    generation: u64,
}

impl GameState {
    /// Creates a fresh game in the given mode.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Active,
            mode,
            generation: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the reset generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Turn or result text shown under the board.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::Active => format!("Player {}'s turn", self.current_player),
            GameStatus::Won { winner, .. } => format!("Player {} wins!", winner),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    pub(super) fn restart(&mut self, mode: GameMode) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::Active;
        self.mode = mode;
        self.generation += 1;
    }

    pub(super) fn mark(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.current_player));
    }

    pub(super) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
