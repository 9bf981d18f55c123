//! Actions and rejections for Dots & Boxes.

use crate::{LineId, Player};
use duel_core::{Rejection, RejectionKind};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer can ask of a Dots & Boxes game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Draw a line.
    Claim {
        /// The acting player.
        player: Player,
        /// The line to draw.
        line: LineId,
    },
    /// Clear all lines and boxes for another round, keeping scores.
    NewGame,
}

impl Action {
    /// Shorthand for [`Action::Claim`].
    pub fn claim(player: Player, line: LineId) -> Self {
        Action::Claim { player, line }
    }
}

/// Why a claim was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The line is already drawn.
    #[display("Line {} is already claimed", _0)]
    LineClaimed(LineId),

    /// The line is not part of this grid.
    #[display("Line {} is not on the grid", _0)]
    LineOutOfRange(LineId),

    /// Every box is owned; the round is over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl std::error::Error for MoveError {}

impl Rejection for MoveError {
    fn kind(&self) -> RejectionKind {
        match self {
            MoveError::LineOutOfRange(_) => RejectionKind::OutOfRange,
            MoveError::LineClaimed(_) | MoveError::GameOver | MoveError::NotYourTurn(_) => {
                RejectionKind::InvalidMove
            }
        }
    }
}
