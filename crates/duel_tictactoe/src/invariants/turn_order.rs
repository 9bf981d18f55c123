//! Turn order: the player to move matches the marks on the board.

use crate::{GameState, Player};
use duel_core::Invariant;

/// Invariant: while the game is in progress, X is to move exactly when
/// both players have the same number of marks.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        if state.status().is_terminal() {
            return true;
        }
        let balanced = state.board().count(Player::X) == state.board().count(Player::O);
        (state.current_player() == Player::X) == balanced
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
