//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed three-in-a-row: the player holding it and its three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding the line.
    pub player: Player,
    /// The three cells forming the line.
    pub line: [Position; 3],
}

/// Checks the board for a winning line.
///
/// The eight candidate lines are scanned in a fixed order: rows top to
/// bottom, then columns left to right, then the main diagonal, then the
/// anti-diagonal. The first match is returned, so the reported line is
/// deterministic even on boards carrying more than one three-in-a-row.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(WinningLine { player, line }),
                Square::Empty => None,
            };
        }
    }

    None
}
