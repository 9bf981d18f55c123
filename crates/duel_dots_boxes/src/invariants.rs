//! Invariants for Dots & Boxes.

use crate::{GameState, Player};
use duel_core::Invariant;

/// Invariant: a box is owned exactly when all four of its sides are drawn.
pub struct BoxesMatchLinesInvariant;

impl Invariant<GameState> for BoxesMatchLinesInvariant {
    fn holds(state: &GameState) -> bool {
        let grid = state.grid();
        grid.squares()
            .all(|square| square.owner.is_some() == grid.is_enclosed(square.id))
    }

    fn description() -> &'static str {
        "Boxes are owned exactly when enclosed"
    }
}

/// Invariant: boxes owned this round never exceed the grid or the session tally.
pub struct RoundScoreInvariant;

impl Invariant<GameState> for RoundScoreInvariant {
    fn holds(state: &GameState) -> bool {
        let owned = state.grid().owned_boxes();
        let within_grid = owned <= state.grid().topology().box_count();
        let within_session = [Player::One, Player::Two]
            .into_iter()
            .all(|p| state.round_score(p) as u32 <= state.scores().get(p));
        within_grid && within_session
    }

    fn description() -> &'static str {
        "Round box counts fit the grid and the session totals"
    }
}

/// Invariant: the round is over if and only if every box has an owner.
pub struct GameOverInvariant;

impl Invariant<GameState> for GameOverInvariant {
    fn holds(state: &GameState) -> bool {
        state.is_game_over() == state.grid().all_boxes_owned()
    }

    fn description() -> &'static str {
        "Game is over iff all boxes are owned"
    }
}

/// All Dots & Boxes invariants as a composable set.
pub type DotsBoxesInvariants = (BoxesMatchLinesInvariant, RoundScoreInvariant, GameOverInvariant);
