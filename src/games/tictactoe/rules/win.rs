//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Orientation of a winning line on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// A row.
    Horizontal,
    /// A column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// Three cells that win the game when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The 8 lines in table order: rows, columns, diagonals.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinLine([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ]),
        WinLine([
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ]),
        // Columns
        WinLine([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]),
        WinLine([
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ]),
        WinLine([
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ]),
        // Diagonals
        WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three cells of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// First and last cell, where a strike-through starts and ends.
    pub fn endpoints(&self) -> (Position, Position) {
        (self.0[0], self.0[2])
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Orientation of the line.
    pub fn direction(&self) -> LineDirection {
        let (start, end) = self.endpoints();
        if start.row() == end.row() {
            LineDirection::Horizontal
        } else if start.col() == end.col() {
            LineDirection::Vertical
        } else if start.col() < end.col() {
            LineDirection::Diagonal
        } else {
            LineDirection::AntiDiagonal
        }
    }

    /// Screen angle of the strike-through in degrees, y axis pointing down.
    ///
    /// Rows give 0, columns 90, the main diagonal 45 and the
    /// anti-diagonal 135.
    pub fn angle_degrees(&self) -> f64 {
        let (start, end) = self.endpoints();
        let dx = end.col() as f64 - start.col() as f64;
        let dy = end.row() as f64 - start.row() as f64;
        dy.atan2(dx).to_degrees()
    }

    fn held_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))
    }
}

/// Returns the first line in table order fully held by `player`.
///
/// Only the mover needs checking after a move; the opponent cannot
/// have completed a line on someone else's turn.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinLine> {
    WinLine::ALL
        .into_iter()
        .find(|line| line.held_by(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Player::X), None);
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board, Player::X), Some(WinLine::ALL[0]));
        assert_eq!(winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));

        let line = winning_line(&board, Player::O).expect("diagonal should win");
        assert_eq!(line.indices(), [2, 4, 6]);
        assert_eq!(line.direction(), LineDirection::AntiDiagonal);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        let mut board = Board::new();
        // X holds the top row and the left column at once.
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(winning_line(&board, Player::X), Some(WinLine::ALL[0]));
    }

    #[test]
    fn test_table_covers_rows_columns_diagonals() {
        let indices: Vec<[usize; 3]> = WinLine::ALL.iter().map(WinLine::indices).collect();
        assert_eq!(
            indices,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_strike_angles() {
        let angles: Vec<f64> = WinLine::ALL.iter().map(WinLine::angle_degrees).collect();
        let expected = [0.0, 0.0, 0.0, 90.0, 90.0, 90.0, 45.0, 135.0];
        for (angle, want) in angles.iter().zip(expected) {
            assert!((angle - want).abs() < 1e-9, "got {angle}, want {want}");
        }
        assert_eq!(WinLine::ALL[1].direction(), LineDirection::Horizontal);
        assert_eq!(WinLine::ALL[4].direction(), LineDirection::Vertical);
        assert_eq!(WinLine::ALL[6].direction(), LineDirection::Diagonal);
    }
}
