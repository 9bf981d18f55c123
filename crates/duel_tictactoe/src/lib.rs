//! Tic-tac-toe rules.
//!
//! A 3x3 board, X moves first, three in a row wins. The crate exposes the
//! board-level primitives ([`Board::apply_move`], [`detect_winner`],
//! [`is_draw`]) and a [`GameState`] that threads them through the shared
//! [`duel_core::TurnBased`] reducer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Action, Move, MoveError};
pub use game::{GameState, Scores};
pub use invariants::TicTacToeInvariants;
pub use position::Position;
pub use rules::{WinLine, detect_winner, is_draw};
pub use types::{Board, Player, Square};
