//! Tic-tac-toe engine with a snapshot timeline and time travel.
//!
//! The engine keeps every board state the game has passed through as an
//! immutable [`Snapshot`], together with a step pointer into that timeline.
//! Jumping to an earlier step rewinds the shown board; making a move while
//! rewound discards the now-stale future before appending. Game phase and
//! turn order are always derived, never stored, so the timeline cannot
//! drift out of sync with the board.
//!
//! # Architecture
//!
//! - **Rules**: pure win/tie evaluation over a board ([`evaluate`])
//! - **Game**: the timeline, step pointer, and value-semantics transitions
//! - **Commands**: the closed intent set a front end dispatches ([`Command`])
//! - **View**: pure projection for rendering ([`GameView`])
//! - **Invariants**: first-class timeline guarantees, checked in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{Command, Game};
//!
//! let game = Game::replay(&[
//!     Command::ApplyMove(0),
//!     Command::ApplyMove(4),
//!     Command::ApplyMove(1),
//! ])?;
//!
//! let view = game.view();
//! assert_eq!(view.status, "Next player: O");
//! assert_eq!(view.moves.len(), 4);
//! # Ok::<(), tictactoe_rewind::CommandError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod command;
mod game;
mod invariants;
mod position;
mod rules;
mod snapshot;
mod types;
mod view;

// Crate-level exports - commands
pub use command::{Command, CommandError};

// Crate-level exports - game state
pub use game::Game;
pub use snapshot::Snapshot;

// Crate-level exports - invariants
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, RootedHistoryInvariant,
    SingleIncrementInvariant, StepInRangeInvariant,
};

// Crate-level exports - rules
pub use rules::{GameStatus, WinningLine, check_winner, evaluate, is_full};

// Crate-level exports - core types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - derived view
pub use view::{CellView, GameView, MoveEntry};
