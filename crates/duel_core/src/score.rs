//! Cumulative session scores.

use crate::{Outcome, Seat};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::debug;

/// Wins per seat plus draws, accumulated across rounds of one session.
///
/// Scores survive a new round; they only start over when a fresh session
/// is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard<P> {
    wins: [u32; 2],
    draws: u32,
    #[serde(skip)]
    _seat: PhantomData<P>,
}

impl<P: Seat> Scoreboard<P> {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self {
            wins: [0; 2],
            draws: 0,
            _seat: PhantomData,
        }
    }

    /// Returns the number of rounds `seat` has won.
    pub fn wins(&self, seat: P) -> u32 {
        self.wins[seat.index()]
    }

    /// Returns the number of drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns the total number of finished rounds.
    pub fn rounds(&self) -> u32 {
        self.wins[0] + self.wins[1] + self.draws
    }

    /// Returns a copy with `outcome` counted once.
    pub fn record(mut self, outcome: &Outcome<P>) -> Self {
        match outcome {
            Outcome::Winner(seat) => self.wins[seat.index()] += 1,
            Outcome::Draw => self.draws += 1,
        }
        debug!(?outcome, wins = ?self.wins, draws = self.draws, "Round recorded");
        self
    }
}

impl<P: Seat> Default for Scoreboard<P> {
    fn default() -> Self {
        Self::new()
    }
}
