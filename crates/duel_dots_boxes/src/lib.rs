//! Dots & Boxes rules.
//!
//! Players take turns claiming the lines between adjacent dots. Claiming the
//! fourth side of a box awards that box to the claimer, and completing at
//! least one box earns another move. The round ends when every box is owned.
//!
//! The grid shape is fixed per session by a [`Topology`]; only ownership of
//! lines and boxes changes while playing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod grid;
pub mod invariants;
mod topology;
mod types;

pub use action::{Action, MoveError};
pub use game::{GameState, RoundScores, Scores};
pub use grid::{Grid, GridShapeError};
pub use invariants::DotsBoxesInvariants;
pub use topology::{DEFAULT_GRID_SIZE, GridSizeError, MAX_GRID_SIZE, MIN_GRID_SIZE, Topology};
pub use types::{BoxId, Direction, Line, LineId, Player, Square};
