//! Mark balance: X never trails O, and never leads by more than one.

use crate::{GameState, Player};
use duel_core::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Follows from X opening and players alternating; a board outside this
/// band cannot be reached through legal moves.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
