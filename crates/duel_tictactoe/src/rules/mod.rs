//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the turn protocol in [`GameState`](crate::GameState)
//! composes them explicitly: winner first, then draw.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, WinLine, detect_winner};
