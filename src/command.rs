//! First-class intents from the presentation layer.
//!
//! Clicks arrive as raw indices; `Command` captures them as domain events
//! that can be validated, dispatched, serialized for replay, and logged.

use crate::game::Game;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An intent from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A cell was clicked: place the next player's mark there.
    ApplyMove(usize),
    /// A history entry was clicked: show that step.
    JumpTo(usize),
    /// The sort toggle was clicked: set the move-list display order.
    SetSortOrder(bool),
}

/// Error raised when a command carries an index outside the board or the
/// timeline.
///
/// Occupied cells and moves after game end are not errors; those commands
/// succeed with the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Cell index outside the board.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// Step index outside the timeline.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// Number of snapshots in the timeline.
        len: usize,
    },
}

impl std::error::Error for CommandError {}

impl Game {
    /// Validates and applies a command, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the command carries an out-of-range
    /// index.
    #[instrument(skip(self))]
    pub fn dispatch(self, command: Command) -> Result<Self, CommandError> {
        match command {
            Command::ApplyMove(index) => {
                let pos = Position::from_index(index)
                    .ok_or(CommandError::CellOutOfRange(index))?;
                Ok(self.apply_move(pos))
            }
            Command::JumpTo(step) => self.jump_to(step),
            Command::SetSortOrder(ascending) => Ok(self.set_move_order(ascending)),
        }
    }

    /// Rebuilds a game by dispatching a recorded command sequence.
    #[instrument]
    pub fn replay(commands: &[Command]) -> Result<Self, CommandError> {
        let mut game = Game::new();
        for command in commands {
            game = game.dispatch(*command)?;
        }
        Ok(game)
    }
}
