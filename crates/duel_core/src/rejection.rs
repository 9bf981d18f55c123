//! Rejection taxonomy shared by every game.

use serde::{Deserialize, Serialize};

/// The two ways an action can be refused.
///
/// Both are ordinary outcomes of user interaction (a double tap, a stale
/// input after the round ended) and never corrupt state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectionKind {
    /// Target already taken, wrong turn, or the game is already over.
    #[display("invalid move")]
    InvalidMove,
    /// Coordinate outside the board.
    #[display("out of range")]
    OutOfRange,
}

/// An error that classifies itself into a [`RejectionKind`].
pub trait Rejection: std::error::Error {
    /// Returns the category of this rejection.
    fn kind(&self) -> RejectionKind;
}
