//! Rooted history invariant: the timeline always starts at the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: the timeline is never empty, and its first snapshot is the
/// empty board with no placed cell.
pub struct RootedHistoryInvariant;

impl Invariant<Game> for RootedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let Some(first) = game.history().first() else {
            return false;
        };

        first.placed().is_none()
            && first.board().squares().iter().all(|s| *s == Square::Empty)
    }

    fn description() -> &'static str {
        "Timeline starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(RootedHistoryInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_moves() {
        let game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center);
        assert!(RootedHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_empty_timeline_violates() {
        let mut game = Game::new();
        game.history.clear();
        assert!(!RootedHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_nonempty_root_violates() {
        let mut game = Game::new().apply_move(Position::Center);
        game.history.remove(0);
        assert!(!RootedHistoryInvariant::holds(&game));
    }
}
