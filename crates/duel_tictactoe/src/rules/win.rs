//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three squares held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    player: Player,
    positions: [Position; 3],
}

impl WinLine {
    /// Returns the player holding the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three positions, in line order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Returns the three board indices, in line order.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }
}

/// Returns the first completed line, scanning rows, then columns, then diagonals.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinLine> {
    LINES.into_iter().find_map(|[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinLine {
                player,
                positions: [a, b, c],
            })
        }
        _ => None,
    })
}
