//! Connect Four rules.
//!
//! A 6x7 upright grid. Discs fall to the lowest empty cell of the chosen
//! column; four in a row horizontally, vertically or diagonally wins.
//!
//! Row 0 is the top of the grid and row 5 the bottom, so discs stack
//! toward decreasing row indices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Action, MoveError};
pub use game::{GameState, Scores};
pub use invariants::ConnectFourInvariants;
pub use rules::{FourInARow, detect_winner, is_full};
pub use types::{Board, COLS, Cell, Coord, Disc, ROWS};
