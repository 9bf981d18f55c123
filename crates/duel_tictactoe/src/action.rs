//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and are validated against the state before anything changes.

use crate::{Player, Position};
use duel_core::{Rejection, RejectionKind};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a board index.
///
/// The index is raw input from the presentation layer and is range-checked
/// when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square index (0-8, row-major).
    pub index: usize,
}

impl Move {
    /// Creates a move at a raw index.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Creates a move at a named position.
    pub fn at(player: Player, position: Position) -> Self {
        Self::new(player, position.into())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> #{}", self.player, self.index),
        }
    }
}

/// Everything the presentation layer can ask of a tic-tac-toe game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Place a mark.
    Place(Move),
    /// Clear the board for another round, keeping scores.
    NewGame,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index is not on the board.
    #[display("Square index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game is already over.
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
            MoveError::OutOfRange(_) => RejectionKind::OutOfRange,
            MoveError::SquareOccupied(_) | MoveError::GameOver | MoveError::NotYourTurn(_) => {
                RejectionKind::InvalidMove
            }
        }
    }
}
