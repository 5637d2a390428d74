//! Step range invariant: the step pointer stays inside the timeline.

use super::Invariant;
use crate::game::Game;

/// Invariant: `current_step` is a valid index into the timeline.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step is a valid timeline index"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_jump() {
        let game = Game::new()
            .apply_move(Position::TopLeft)
            .apply_move(Position::Center)
            .jump_to(1)
            .expect("step 1 exists");
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let mut game = Game::new();
        game.current_step = 3;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
