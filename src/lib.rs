//! Duel games: Tic-Tac-Toe, Connect Four and Dots & Boxes.
//!
//! Each game lives in its own crate as a pure state machine following the
//! [`duel_core`] conventions. This crate ties them together:
//!
//! - **Game**: [`AnyGame`] and [`AnyAction`], one value for whichever game is active
//! - **Session**: [`Session`], the active game plus game selection
//! - **Config**: [`RulesConfig`], tunable rules loaded from TOML
//!
//! # Example
//!
//! ```
//! use duel_games::{GameKind, Session, tictactoe};
//! use duel_games::GameEvent;
//!
//! let mut session = Session::new(GameKind::TicTacToe);
//! let events = session.dispatch(
//!     tictactoe::Action::Place(tictactoe::Move::new(tictactoe::Player::X, 4)).into(),
//! );
//! assert_eq!(events, vec![GameEvent::MoveAccepted, GameEvent::TurnPassed]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod game;
mod session;

pub use config::{ConfigError, DotsConfig, RulesConfig};
pub use game::{AnyAction, AnyError, AnyGame, GameKind, Phase};
pub use session::Session;

pub use duel_core::{
    GameEvent, Outcome, Rejection, RejectionKind, Seat, Status, Transition, TurnBased, reduce,
};

pub use duel_connect_four as connect_four;
pub use duel_dots_boxes as dots_boxes;
pub use duel_tictactoe as tictactoe;
