//! Immutable board snapshots forming the game timeline.

use crate::position::Position;
use crate::types::Board;
use serde::{Deserialize, Serialize};

/// One immutable board state in the timeline, together with the cell placed
/// to reach it.
///
/// The initial snapshot is the empty board and has no placed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    placed: Option<Position>,
}

impl Snapshot {
    /// Creates the initial snapshot: empty board, no placed cell.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Creates a snapshot reached by placing a mark at `placed`.
    pub fn new(board: Board, placed: Position) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell placed to reach this snapshot, if any.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }
}
