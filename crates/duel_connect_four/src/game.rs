//! Turn protocol and session state for Connect Four.

use crate::invariants::ConnectFourInvariants;
use crate::rules::{FourInARow, detect_winner, is_full};
use crate::{Action, Board, Disc, MoveError};
use duel_core::{
    GameEvent, Outcome, Scoreboard, Seat, Status, Transition, TurnBased, enforce_invariants,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Wins per colour plus draws.
pub type Scores = Scoreboard<Disc>;

/// Session state: grid, colour to move, status, winning line and scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Disc,
    pub(crate) status: Status<Disc>,
    pub(crate) winning_line: Option<FourInARow>,
    pub(crate) scores: Scores,
}

impl GameState {
    /// Creates a new game with zeroed scores. Red opens.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Disc::first(),
            status: Status::InProgress,
            winning_line: None,
            scores: Scores::new(),
        }
    }

    /// Returns the grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the colour to move.
    pub fn current_player(&self) -> Disc {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> Status<Disc> {
        self.status
    }

    /// Returns the winning four, if any.
    pub fn winning_line(&self) -> Option<&FourInARow> {
        self.winning_line.as_ref()
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    #[instrument(skip(self))]
    fn drop_disc(&self, disc: Disc, column: usize) -> Result<Transition<Self>, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if disc != self.current_player {
            return Err(MoveError::NotYourTurn(disc));
        }

        let (board, landed) = self.board.drop_disc(column, disc)?;
        let mut next = Self {
            board,
            ..self.clone()
        };
        let mut events = vec![GameEvent::MoveAccepted];
        debug!(%landed, %disc, "Disc dropped");

        if let Some(line) = detect_winner(&next.board) {
            let outcome = Outcome::Winner(line.disc());
            info!(winner = %line.disc(), cells = ?line.cells(), "Four in a row");
            next.status = Status::Finished(outcome);
            next.winning_line = Some(line);
            next.scores = next.scores.record(&outcome);
            events.push(GameEvent::Won);
        } else if is_full(&next.board) {
            info!("Board full, game drawn");
            next.status = Status::Finished(Outcome::Draw);
            next.scores = next.scores.record(&Outcome::Draw);
            events.push(GameEvent::Draw);
        } else {
            next.current_player = disc.opponent();
            events.push(GameEvent::TurnPassed);
        }

        enforce_invariants::<ConnectFourInvariants, _>(&next);
        Ok(Transition::new(next, events))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnBased for GameState {
    type Seat = Disc;
    type Action = Action;
    type Error = MoveError;

    fn to_move(&self) -> Disc {
        self.current_player
    }

    fn status(&self) -> Status<Disc> {
        self.status
    }

    fn apply(&self, action: &Action) -> Result<Transition<Self>, MoveError> {
        match *action {
            Action::Drop { disc, column } => self.drop_disc(disc, column),
            Action::NewGame => Ok(Transition::new(self.new_round(), vec![GameEvent::NewRound])),
        }
    }

    #[instrument(skip(self))]
    fn new_round(&self) -> Self {
        info!(rounds = self.scores.rounds(), "Starting new round");
        Self {
            scores: self.scores,
            ..Self::new()
        }
    }
}
