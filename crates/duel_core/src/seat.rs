//! Two-player seat abstraction.

use std::fmt::Debug;
use std::hash::Hash;

/// One of the two players sitting at the board.
///
/// Each game names its seats differently (X/O, red/yellow, player one/two),
/// but all of them alternate and index into two-slot score tables.
pub trait Seat: Copy + Eq + Hash + Debug {
    /// Both seats, in turn order. `ALL[0]` moves first in a fresh game.
    const ALL: [Self; 2];

    /// Returns the other seat.
    fn opponent(self) -> Self;

    /// Returns the slot of this seat (0 or 1).
    fn index(self) -> usize;

    /// Returns the seat that opens a fresh game.
    fn first() -> Self {
        Self::ALL[0]
    }
}
