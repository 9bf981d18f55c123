//! Draw detection logic for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if every square is occupied.
///
/// Only meaningful once [`detect_winner`](super::detect_winner) has come back
/// empty: a full board with three in a row is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
