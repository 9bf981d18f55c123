//! Identifiers and ownership records.

use derive_new::new;
use duel_core::Seat;
use serde::{Deserialize, Serialize};

/// One of the two players. Player one opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// The opening player.
    #[display("Player 1")]
    One,
    /// The second player.
    #[display("Player 2")]
    Two,
}

impl Seat for Player {
    const ALL: [Self; 2] = [Player::One, Player::Two];

    fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Orientation of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Joins dot `(row, col)` to dot `(row, col + 1)`.
    Horizontal,
    /// Joins dot `(row, col)` to dot `(row + 1, col)`.
    Vertical,
}

/// A line, named by the dot it starts from and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct LineId {
    /// Row of the starting dot.
    pub row: usize,
    /// Column of the starting dot.
    pub col: usize,
    /// Which way the line runs.
    pub direction: Direction,
}

impl LineId {
    /// A horizontal line starting at dot `(row, col)`.
    pub fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Direction::Horizontal)
    }

    /// A vertical line starting at dot `(row, col)`.
    pub fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Direction::Vertical)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.direction {
            Direction::Horizontal => 'h',
            Direction::Vertical => 'v',
        };
        write!(f, "{}({}, {})", tag, self.row, self.col)
    }
}

/// A box, named by its top-left dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct BoxId {
    /// Row of the top-left dot.
    pub row: usize,
    /// Column of the top-left dot.
    pub col: usize,
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "box({}, {})", self.row, self.col)
    }
}

/// A line and who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Which line.
    pub id: LineId,
    /// Who claimed it, if anyone.
    pub owner: Option<Player>,
}

/// A box and who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    /// Which box.
    pub id: BoxId,
    /// Who completed it, if anyone. Set once, never reassigned.
    pub owner: Option<Player>,
}
