//! Shared conventions for the duel games.
//!
//! Every game in the workspace is a pure state machine with the same shape:
//! an immutable state value, an action type, and a transition function that
//! either produces the next state plus a handful of semantic [`GameEvent`]s or
//! rejects the action without touching anything.
//!
//! # Architecture
//!
//! - **Seat**: two-valued player identity ([`Seat`])
//! - **Phases**: [`Status`] and [`Outcome`], the one-way `InProgress → Finished` machine
//! - **Scores**: cumulative per-session [`Scoreboard`]
//! - **Events**: [`GameEvent`] tags the presentation layer maps to feedback
//! - **Rules**: the [`TurnBased`] trait and the [`reduce`] reducer
//! - **Invariants**: [`Invariant`] and [`InvariantSet`] checked after each transition

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod event;
mod invariants;
mod phases;
mod rejection;
mod rules;
mod score;
mod seat;

pub use event::GameEvent;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, enforce_invariants};
pub use phases::{Outcome, Status};
pub use rejection::{Rejection, RejectionKind};
pub use rules::{Transition, TurnBased, reduce};
pub use score::Scoreboard;
pub use seat::Seat;
