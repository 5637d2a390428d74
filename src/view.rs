//! Pure view derivation for the presentation layer.
//!
//! The presentation layer renders [`GameView`] and never reads engine
//! state directly. Deriving the view is a pure function of [`Game`], so
//! the same state always produces the same view.

use crate::game::Game;
use crate::position::Position;
use crate::rules::GameStatus;
use crate::snapshot::Snapshot;
use crate::types::Square;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One rendered cell: its mark and whether it belongs to the winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// The mark in the cell.
    pub square: Square,
    /// True when the cell is part of the winning line.
    pub highlighted: bool,
}

/// One move-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Timeline step this entry jumps to.
    pub step: usize,
    /// Display label: "Go to move start" or "Go to move #N".
    pub label: String,
    /// True when this entry is the step currently shown.
    pub current: bool,
    /// 1-indexed (row, column) of the cell placed at this step; absent for
    /// the start entry.
    pub location: Option<(usize, usize)>,
}

/// Derived view of the complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The nine cells of the board shown, row-major.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
}

impl Game {
    /// Derives the complete view of the current state.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let status = self.status();

        let winning_line: &[Position] = match &status {
            GameStatus::Won(win) => &win.line,
            _ => &[],
        };

        let mut cells = [CellView {
            square: Square::Empty,
            highlighted: false,
        }; 9];
        for pos in Position::ALL {
            cells[pos.to_index()] = CellView {
                square: self.board().get(pos),
                highlighted: winning_line.contains(&pos),
            };
        }

        let status_text = match &status {
            GameStatus::Won(win) => format!("Winner: {}", win.player),
            GameStatus::Tie => "Tie".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
        };

        let mut moves: Vec<MoveEntry> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| self.move_entry(step, snapshot))
            .collect();
        if !self.ascending() {
            moves.reverse();
        }

        GameView {
            cells,
            status: status_text,
            moves,
        }
    }

    fn move_entry(&self, step: usize, snapshot: &Snapshot) -> MoveEntry {
        let label = if step == 0 {
            "Go to move start".to_string()
        } else {
            format!("Go to move #{step}")
        };

        MoveEntry {
            step,
            label,
            current: step == self.current_step(),
            location: snapshot
                .placed()
                .map(|pos| (pos.row() + 1, pos.column() + 1)),
        }
    }
}
