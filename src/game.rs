//! One value that can hold any of the three games.

use duel_connect_four as connect_four;
use duel_core::{GameEvent, Rejection, RejectionKind, Status, Transition, TurnBased, reduce};
use duel_dots_boxes as dots_boxes;
use duel_tictactoe as tictactoe;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{debug, instrument};

/// Which game is being played.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GameKind {
    /// 3x3 three in a row.
    #[strum(to_string = "Tic-Tac-Toe")]
    TicTacToe,
    /// 6x7 gravity grid, four in a row.
    #[strum(to_string = "Connect Four")]
    ConnectFour,
    /// Claim lines, complete boxes.
    #[strum(to_string = "Dots & Boxes")]
    DotsAndBoxes,
}

/// An action addressed to one of the games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub enum AnyAction {
    /// A tic-tac-toe action.
    TicTacToe(tictactoe::Action),
    /// A Connect Four action.
    ConnectFour(connect_four::Action),
    /// A Dots & Boxes action.
    DotsAndBoxes(dots_boxes::Action),
}

impl AnyAction {
    /// The game this action is meant for.
    pub fn kind(&self) -> GameKind {
        match self {
            AnyAction::TicTacToe(_) => GameKind::TicTacToe,
            AnyAction::ConnectFour(_) => GameKind::ConnectFour,
            AnyAction::DotsAndBoxes(_) => GameKind::DotsAndBoxes,
        }
    }

    /// The "new game" action for `kind`.
    pub fn new_game(kind: GameKind) -> Self {
        match kind {
            GameKind::TicTacToe => tictactoe::Action::NewGame.into(),
            GameKind::ConnectFour => connect_four::Action::NewGame.into(),
            GameKind::DotsAndBoxes => dots_boxes::Action::NewGame.into(),
        }
    }
}

/// Why an [`AnyAction`] was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum AnyError {
    /// Refused by the tic-tac-toe rules.
    #[display("{_0}")]
    TicTacToe(tictactoe::MoveError),
    /// Refused by the Connect Four rules.
    #[display("{_0}")]
    ConnectFour(connect_four::MoveError),
    /// Refused by the Dots & Boxes rules.
    #[display("{_0}")]
    DotsAndBoxes(dots_boxes::MoveError),
    /// The action was addressed to a different game.
    #[display("{action} action sent to {game}")]
    #[from(ignore)]
    GameMismatch {
        /// The game being played.
        game: GameKind,
        /// The game the action was meant for.
        action: GameKind,
    },
}

impl std::error::Error for AnyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnyError::TicTacToe(e) => Some(e),
            AnyError::ConnectFour(e) => Some(e),
            AnyError::DotsAndBoxes(e) => Some(e),
            AnyError::GameMismatch { .. } => None,
        }
    }
}

impl Rejection for AnyError {
    fn kind(&self) -> RejectionKind {
        match self {
            AnyError::TicTacToe(e) => e.kind(),
            AnyError::ConnectFour(e) => e.kind(),
            AnyError::DotsAndBoxes(e) => e.kind(),
            AnyError::GameMismatch { .. } => RejectionKind::InvalidMove,
        }
    }
}

/// The state of whichever game is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub enum AnyGame {
    /// Tic-tac-toe.
    TicTacToe(tictactoe::GameState),
    /// Connect Four.
    ConnectFour(connect_four::GameState),
    /// Dots & Boxes.
    DotsAndBoxes(dots_boxes::GameState),
}

impl AnyGame {
    /// A fresh game of `kind` with zero scores and the standard board.
    pub fn new(kind: GameKind) -> Self {
        match kind {
            GameKind::TicTacToe => tictactoe::GameState::new().into(),
            GameKind::ConnectFour => connect_four::GameState::new().into(),
            GameKind::DotsAndBoxes => dots_boxes::GameState::new().into(),
        }
    }

    /// Which game this is.
    pub fn kind(&self) -> GameKind {
        match self {
            AnyGame::TicTacToe(_) => GameKind::TicTacToe,
            AnyGame::ConnectFour(_) => GameKind::ConnectFour,
            AnyGame::DotsAndBoxes(_) => GameKind::DotsAndBoxes,
        }
    }

    /// Applies `action`, failing if it is illegal or meant for another game.
    pub fn apply(&self, action: &AnyAction) -> Result<Transition<AnyGame>, AnyError> {
        match (self, action) {
            (AnyGame::TicTacToe(g), AnyAction::TicTacToe(a)) => {
                Ok(g.apply(a)?.map(AnyGame::from))
            }
            (AnyGame::ConnectFour(g), AnyAction::ConnectFour(a)) => {
                Ok(g.apply(a)?.map(AnyGame::from))
            }
            (AnyGame::DotsAndBoxes(g), AnyAction::DotsAndBoxes(a)) => {
                Ok(g.apply(a)?.map(AnyGame::from))
            }
            _ => Err(AnyError::GameMismatch {
                game: self.kind(),
                action: action.kind(),
            }),
        }
    }

    /// Applies `action`, turning any refusal into an unchanged state plus a
    /// single [`GameEvent::Rejected`].
    #[instrument(skip(self), fields(game = %self.kind()))]
    pub fn reduce(&self, action: &AnyAction) -> Transition<AnyGame> {
        match (self, action) {
            (AnyGame::TicTacToe(g), AnyAction::TicTacToe(a)) => reduce(g, a).map(AnyGame::from),
            (AnyGame::ConnectFour(g), AnyAction::ConnectFour(a)) => {
                reduce(g, a).map(AnyGame::from)
            }
            (AnyGame::DotsAndBoxes(g), AnyAction::DotsAndBoxes(a)) => {
                reduce(g, a).map(AnyGame::from)
            }
            _ => {
                debug!(action = %action.kind(), "Action addressed to another game");
                Transition::new(
                    self.clone(),
                    vec![GameEvent::Rejected(RejectionKind::InvalidMove)],
                )
            }
        }
    }

    /// Clears the board for another round, keeping scores.
    pub fn new_round(&self) -> Self {
        match self {
            AnyGame::TicTacToe(g) => g.new_round().into(),
            AnyGame::ConnectFour(g) => g.new_round().into(),
            AnyGame::DotsAndBoxes(g) => g.new_round().into(),
        }
    }

    /// Returns the tic-tac-toe state, if that is the active game.
    pub fn as_tictactoe(&self) -> Option<&tictactoe::GameState> {
        match self {
            AnyGame::TicTacToe(g) => Some(g),
            _ => None,
        }
    }

    /// Returns the Connect Four state, if that is the active game.
    pub fn as_connect_four(&self) -> Option<&connect_four::GameState> {
        match self {
            AnyGame::ConnectFour(g) => Some(g),
            _ => None,
        }
    }

    /// Returns the Dots & Boxes state, if that is the active game.
    pub fn as_dots_boxes(&self) -> Option<&dots_boxes::GameState> {
        match self {
            AnyGame::DotsAndBoxes(g) => Some(g),
            _ => None,
        }
    }
}

/// Shorthand for the phase of whichever game is active, with seats erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Someone won.
    Won,
    /// Nobody won.
    Draw,
}

impl From<&AnyGame> for Phase {
    fn from(game: &AnyGame) -> Self {
        fn erase<P: Copy>(status: Status<P>) -> Phase {
            match status {
                Status::InProgress => Phase::InProgress,
                Status::Finished(outcome) if outcome.is_draw() => Phase::Draw,
                Status::Finished(_) => Phase::Won,
            }
        }
        match game {
            AnyGame::TicTacToe(g) => erase(TurnBased::status(g)),
            AnyGame::ConnectFour(g) => erase(TurnBased::status(g)),
            AnyGame::DotsAndBoxes(g) => erase(TurnBased::status(g)),
        }
    }
}
