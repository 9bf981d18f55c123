//! Semantic event tags emitted by transitions.

use crate::RejectionKind;
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a transition.
///
/// Events carry no state of their own. The presentation layer maps them to
/// sensory feedback (haptics, sounds, animation) after rendering the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A move was validated and applied.
    #[display("move accepted")]
    MoveAccepted,
    /// The move completed this many boxes.
    #[display("{} box(es) completed", _0)]
    BoxesCompleted(u8),
    /// The mover keeps the turn.
    #[display("extra turn")]
    ExtraTurn,
    /// The turn passed to the opponent.
    #[display("turn passed")]
    TurnPassed,
    /// The move won the round.
    #[display("win")]
    Won,
    /// The move ended the round in a draw.
    #[display("draw")]
    Draw,
    /// A fresh round was started.
    #[display("new round")]
    NewRound,
    /// The action was rejected; the state is unchanged.
    #[display("rejected: {}", _0)]
    Rejected(RejectionKind),
}

impl GameEvent {
    /// Returns true for the events that end a round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::Won | GameEvent::Draw)
    }
}
