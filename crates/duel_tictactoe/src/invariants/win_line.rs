//! Win line consistency.

use crate::{GameState, Square};
use duel_core::{Invariant, Status};

/// Invariant: a win line is recorded exactly when the game was won, and
/// every square on it belongs to the winner.
pub struct WinLineInvariant;

impl Invariant<GameState> for WinLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.status().winner(), state.win_line()) {
            (None, None) => true,
            (Some(winner), Some(line)) => {
                line.player() == winner
                    && line
                        .positions()
                        .iter()
                        .all(|pos| state.board().get(*pos) == Square::Occupied(winner))
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Win line is present exactly when a player has won, and is held by that player"
    }
}
