//! Single increment invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::game::Game;
use crate::position::Position;
use crate::types::{Player, Square};

/// Invariant: consecutive snapshots differ in exactly one cell, which goes
/// from empty to a mark, and the marks alternate starting with X.
pub struct SingleIncrementInvariant;

impl Invariant<Game> for SingleIncrementInvariant {
    fn holds(game: &Game) -> bool {
        for (step, pair) in game.history().windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);

            // X moves on even steps
            let mover = if step % 2 == 0 { Player::X } else { Player::O };

            let Some(placed) = after.placed() else {
                return false;
            };
            if !before.board().is_empty(placed) {
                return false;
            }
            if after.board().get(placed) != Square::Occupied(mover) {
                return false;
            }

            let changed = Position::ALL
                .iter()
                .filter(|&&pos| before.board().get(pos) != after.board().get(pos))
                .count();
            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by one alternating mark"
    }
}
