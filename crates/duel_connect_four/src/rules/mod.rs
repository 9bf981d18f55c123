//! Game rules for Connect Four.

mod full;
mod win;

pub use full::is_full;
pub use win::{FourInARow, detect_winner};
