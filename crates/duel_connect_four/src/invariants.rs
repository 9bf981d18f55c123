//! Invariants for Connect Four.

use crate::{COLS, Cell, Coord, Disc, GameState, ROWS};
use duel_core::Invariant;

/// Invariant: no disc floats above an empty cell.
pub struct GravityInvariant;

impl Invariant<GameState> for GravityInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        (0..COLS).all(|col| {
            // Scanning upward, once an empty cell is seen every cell above it is empty.
            let mut seen_empty = false;
            (0..ROWS).rev().all(|row| match board.get(Coord::new(row, col)) {
                Some(Cell::Empty) => {
                    seen_empty = true;
                    true
                }
                Some(Cell::Filled(_)) => !seen_empty,
                None => false,
            })
        })
    }

    fn description() -> &'static str {
        "Discs rest on the bottom row or on another disc"
    }
}

/// Invariant: red has as many discs as yellow, or one more.
pub struct DiscBalanceInvariant;

impl Invariant<GameState> for DiscBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let red = state.board().count(Disc::Red);
        let yellow = state.board().count(Disc::Yellow);
        red == yellow || red == yellow + 1
    }

    fn description() -> &'static str {
        "Red and yellow alternate, red first"
    }
}

/// Invariant: a winning line is recorded exactly when a colour has won, on
/// cells of that colour.
pub struct WinningLineInvariant;

impl Invariant<GameState> for WinningLineInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.status().winner(), state.winning_line()) {
            (None, None) => true,
            (Some(winner), Some(line)) => {
                line.disc() == winner
                    && line
                        .cells()
                        .iter()
                        .all(|c| state.board().get(*c) == Some(Cell::Filled(winner)))
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winning line matches the recorded winner"
    }
}

/// All Connect Four invariants as a composable set.
pub type ConnectFourInvariants = (GravityInvariant, DiscBalanceInvariant, WinningLineInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use duel_core::InvariantSet;

    const E: Cell = Cell::Empty;
    const R: Cell = Cell::Filled(Disc::Red);

    #[test]
    fn test_fresh_game_holds() {
        assert!(ConnectFourInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_floating_disc_violates_gravity() {
        let mut state = GameState::new();
        let mut rows = [[E; COLS]; ROWS];
        rows[2][3] = R;
        state.board = Board::from_rows(rows);
        assert!(!GravityInvariant::holds(&state));
        assert!(DiscBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_yellow_ahead_violates_balance() {
        let mut state = GameState::new();
        state.board = Board::new().drop_disc(0, Disc::Yellow).unwrap().0;
        assert!(!DiscBalanceInvariant::holds(&state));
    }
}
