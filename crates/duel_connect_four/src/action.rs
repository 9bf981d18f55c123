//! Actions and rejections for Connect Four.

use crate::Disc;
use duel_core::{Rejection, RejectionKind};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer can ask of a Connect Four game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Drop a disc into a column.
    Drop {
        /// Colour of the acting player.
        disc: Disc,
        /// Target column (0-6).
        column: usize,
    },
    /// Clear the grid for another round, keeping scores.
    NewGame,
}

impl Action {
    /// Shorthand for [`Action::Drop`].
    pub fn drop_disc(disc: Disc, column: usize) -> Self {
        Action::Drop { disc, column }
    }
}

/// Why a drop was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Every cell in the column is taken.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// The column does not exist.
    #[display("Column {} is out of range (must be 0-6)", _0)]
    ColumnOutOfRange(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this colour's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Disc),
}

impl std::error::Error for MoveError {}

impl Rejection for MoveError {
    fn kind(&self) -> RejectionKind {
        match self {
            MoveError::ColumnOutOfRange(_) => RejectionKind::OutOfRange,
            MoveError::ColumnFull(_) | MoveError::GameOver | MoveError::NotYourTurn(_) => {
                RejectionKind::InvalidMove
            }
        }
    }
}
