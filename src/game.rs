//! Game state and transitions.
//!
//! `Game` is a value: each transition consumes the current state and
//! returns the next one, so the engine can be driven and unit-tested
//! without any rendering harness.

use crate::command::CommandError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, GameStatus};
use crate::snapshot::Snapshot;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete game state: the snapshot timeline, the step currently shown,
/// and the move-list display order.
///
/// The game phase is never stored; it is derived from the shown board by
/// [`rules::evaluate`] on every read. Likewise the player to move is
/// derived from step parity (X moves on even steps), so a jump can never
/// leave the turn out of sync with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_step: usize,
    pub(crate) ascending: bool,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a new game: a single empty snapshot, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_step: 0,
            ascending: true,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors (all derived state lives here)
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the full snapshot timeline.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the snapshot currently shown.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_step]
    }

    /// Returns the board currently shown.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns true if the move list displays in ascending order.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the player who moves next. X moves on even steps.
    pub fn to_move(&self) -> Player {
        if self.current_step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Evaluates the board currently shown.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.board())
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Places the next player's mark at `pos`.
    ///
    /// A move on an occupied cell, or after the game has ended, is ignored
    /// by policy and the state comes back unchanged. A move made while an
    /// earlier step is shown discards the later snapshots before appending,
    /// so the timeline stays linear.
    #[instrument(skip(self))]
    pub fn apply_move(self, pos: Position) -> Self {
        if self.status().is_over() || !self.board().is_empty(pos) {
            return self;
        }

        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(self.to_move()));

        let mut game = self;
        game.history.truncate(game.current_step + 1);
        game.history.push(Snapshot::new(board, pos));
        game.current_step = game.history.len() - 1;

        game.assert_invariants();
        game
    }

    /// Shows the snapshot at `step` without altering the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::StepOutOfRange`] when `step` is not a valid
    /// timeline index.
    #[instrument(skip(self))]
    pub fn jump_to(self, step: usize) -> Result<Self, CommandError> {
        if step >= self.history.len() {
            return Err(CommandError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let mut game = self;
        game.current_step = step;

        game.assert_invariants();
        Ok(game)
    }

    /// Sets the move-list display order. No other effect.
    #[instrument(skip(self))]
    pub fn set_move_order(self, ascending: bool) -> Self {
        Self { ascending, ..self }
    }

    /// Checks all game invariants in debug builds.
    pub(crate) fn assert_invariants(&self) {
        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariant violated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert!(game.ascending());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_history_tracks_current_step() {
        let mut game = Game::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game = game.apply_move(pos);
            assert_eq!(game.history().len(), game.current_step() + 1);
        }
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let game = Game::new().apply_move(Position::Center);
        let same = game.clone().apply_move(Position::Center);
        assert_eq!(same, game);
    }
}
