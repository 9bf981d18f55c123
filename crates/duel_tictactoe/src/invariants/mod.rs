//! Invariants for tic-tac-toe.
//!
//! Checked after every accepted move in debug builds.

pub mod mark_balance;
pub mod turn_order;
pub mod win_line;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_order::TurnOrderInvariant;
pub use win_line::WinLineInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (MarkBalanceInvariant, TurnOrderInvariant, WinLineInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, GameState, Move, Player, Position};
    use duel_core::{InvariantSet, TurnBased};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = [
            Move::at(Player::X, Position::TopLeft),
            Move::at(Player::O, Position::Center),
            Move::at(Player::X, Position::TopRight),
        ]
        .into_iter()
        .try_fold(GameState::new(), |state, mv| {
            state.apply(&Action::Place(mv)).map(|t| t.into_state())
        })
        .unwrap();

        assert!(TicTacToeInvariants::check_all(&state).is_ok());
    }
}
