//! The reducer contract every game implements.
//!
//! States are values: `apply` borrows the current state and returns a new
//! one, so a rejected action cannot leave anything half-written.

use crate::{GameEvent, Rejection, Seat, Status};
use tracing::{debug, instrument};

/// A two-player, turn-based game expressed as a pure state machine.
pub trait TurnBased: Clone {
    /// The player identity.
    type Seat: Seat;
    /// Everything the presentation layer can ask for.
    type Action: std::fmt::Debug;
    /// Why an action was refused.
    type Error: Rejection;

    /// Returns the seat expected to act next.
    fn to_move(&self) -> Self::Seat;

    /// Returns the current phase.
    fn status(&self) -> Status<Self::Seat>;

    /// Applies an action, returning the next state and the events it produced.
    ///
    /// # Errors
    ///
    /// Returns the game's rejection when the action is not legal in this
    /// state. `self` is untouched either way.
    fn apply(&self, action: &Self::Action) -> Result<Transition<Self>, Self::Error>;

    /// Returns a fresh round: empty board, opening seat to move, scores carried over.
    fn new_round(&self) -> Self;
}

/// The result of an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S> {
    state: S,
    events: Vec<GameEvent>,
}

impl<S> Transition<S> {
    /// Creates a transition into `state`.
    pub fn new(state: S, events: Vec<GameEvent>) -> Self {
        Self { state, events }
    }

    /// Returns the resulting state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the events, in the order they happened.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Returns true if `event` was emitted.
    pub fn emitted(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }

    /// Consumes the transition, keeping only the state.
    pub fn into_state(self) -> S {
        self.state
    }

    /// Consumes the transition into its parts.
    pub fn into_parts(self) -> (S, Vec<GameEvent>) {
        (self.state, self.events)
    }

    /// Converts the state while keeping the events.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Transition<T> {
        Transition {
            state: f(self.state),
            events: self.events,
        }
    }
}

/// Reducer: `(state, action) -> state`.
///
/// Accepted actions yield the next state. Rejected actions yield the input
/// state unchanged with a single [`GameEvent::Rejected`] tag.
#[instrument(skip(state), fields(to_move = ?state.to_move()))]
pub fn reduce<G: TurnBased>(state: &G, action: &G::Action) -> Transition<G> {
    match state.apply(action) {
        Ok(transition) => transition,
        Err(err) => {
            let kind = err.kind();
            debug!(%err, ?kind, "Action rejected");
            Transition::new(state.clone(), vec![GameEvent::Rejected(kind)])
        }
    }
}
