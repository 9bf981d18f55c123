use crate::Board;
use tracing::instrument;

/// Checks if every cell holds a disc.
///
/// Checked only after [`detect_winner`](super::detect_winner) finds nothing;
/// a full board is then a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
