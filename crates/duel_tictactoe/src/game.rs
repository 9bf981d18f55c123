//! Turn protocol and session state for tic-tac-toe.

use crate::invariants::TicTacToeInvariants;
use crate::rules::{WinLine, detect_winner, is_draw};
use crate::{Action, Board, Move, MoveError, Player};
use duel_core::{
    GameEvent, Outcome, Scoreboard, Seat, Status, Transition, TurnBased, enforce_invariants,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Wins for X and O plus draws.
pub type Scores = Scoreboard<Player>;

/// Complete game state.
///
/// Lifecycle: created empty, advanced by each accepted move, finished
/// exactly once (win or draw), and reset by [`Action::NewGame`], which
/// keeps the scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: Status<Player>,
    pub(crate) win_line: Option<WinLine>,
    pub(crate) scores: Scores,
}

impl GameState {
    /// Creates a new game with zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::first(),
            status: Status::InProgress,
            win_line: None,
            scores: Scores::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> Status<Player> {
        self.status
    }

    /// Returns the winning line, if the game was won.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Validates and applies a move.
    #[instrument(skip(self, mv), fields(mv = %mv))]
    fn place(&self, mv: Move) -> Result<Transition<Self>, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mv.player != self.current_player {
            return Err(MoveError::NotYourTurn(mv.player));
        }

        let board = self.board.apply_move(mv.index, mv.player)?;
        let mut next = Self {
            board,
            ..self.clone()
        };
        let mut events = vec![GameEvent::MoveAccepted];
        debug!(board = %next.board.display(), "Mark placed");

        if let Some(line) = detect_winner(&next.board) {
            let outcome = Outcome::Winner(line.player());
            info!(winner = %line.player(), line = ?line.indices(), "Game won");
            next.status = Status::Finished(outcome);
            next.win_line = Some(line);
            next.scores = next.scores.record(&outcome);
            events.push(GameEvent::Won);
        } else if is_draw(&next.board) {
            info!("Game drawn");
            next.status = Status::Finished(Outcome::Draw);
            next.scores = next.scores.record(&Outcome::Draw);
            events.push(GameEvent::Draw);
        } else {
            next.current_player = mv.player.next();
            events.push(GameEvent::TurnPassed);
        }

        enforce_invariants::<TicTacToeInvariants, _>(&next);
        Ok(Transition::new(next, events))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnBased for GameState {
    type Seat = Player;
    type Action = Action;
    type Error = MoveError;

    fn to_move(&self) -> Player {
        self.current_player
    }

    fn status(&self) -> Status<Player> {
        self.status
    }

    fn apply(&self, action: &Action) -> Result<Transition<Self>, MoveError> {
        match action {
            Action::Place(mv) => self.place(*mv),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use duel_core::{RejectionKind, reduce};

    fn play(moves: &[(Player, Position)]) -> GameState {
        moves.iter().fold(GameState::new(), |state, (player, pos)| {
            state
                .apply(&Action::Place(Move::at(*player, *pos)))
                .expect("legal move")
                .into_state()
        })
    }

    #[test]
    fn test_first_move_passes_turn() {
        let t = GameState::new()
            .apply(&Action::Place(Move::at(Player::X, Position::Center)))
            .unwrap();
        assert_eq!(t.state().current_player(), Player::O);
        assert_eq!(t.events(), &[GameEvent::MoveAccepted, GameEvent::TurnPassed]);
    }

    #[test]
    fn test_win_records_score_and_line() {
        let state = play(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopCenter),
            (Player::O, Position::BottomLeft),
            (Player::X, Position::TopRight),
        ]);
        assert_eq!(state.status().winner(), Some(Player::X));
        assert_eq!(state.win_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(state.scores().wins(Player::X), 1);
        // The winner keeps the turn marker; nobody moves again.
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_draw_records_score() {
        // X O X / X O O / O X X
        let state = play(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopCenter),
            (Player::X, Position::TopRight),
            (Player::O, Position::Center),
            (Player::X, Position::MiddleLeft),
            (Player::O, Position::MiddleRight),
            (Player::X, Position::BottomCenter),
            (Player::O, Position::BottomLeft),
            (Player::X, Position::BottomRight),
        ]);
        assert_eq!(state.status(), Status::Finished(Outcome::Draw));
        assert_eq!(state.win_line(), None);
        assert_eq!(state.scores().draws(), 1);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let err = GameState::new()
            .apply(&Action::Place(Move::at(Player::O, Position::Center)))
            .unwrap_err();
        assert_eq!(err, MoveError::NotYourTurn(Player::O));
    }

    #[test]
    fn test_finished_game_is_absorbing() {
        let state = play(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopCenter),
            (Player::O, Position::BottomLeft),
            (Player::X, Position::TopRight),
        ]);
        let t = reduce(&state, &Action::Place(Move::at(Player::X, Position::BottomRight)));
        assert_eq!(t.state(), &state);
        assert_eq!(t.events(), &[GameEvent::Rejected(RejectionKind::InvalidMove)]);
        assert_eq!(
            state.apply(&Action::Place(Move::at(Player::X, Position::BottomRight))),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let state = GameState::new();
        let t = reduce(&state, &Action::Place(Move::new(Player::X, 12)));
        assert_eq!(t.state(), &state);
        assert_eq!(t.events(), &[GameEvent::Rejected(RejectionKind::OutOfRange)]);
    }

    #[test]
    fn test_new_game_keeps_scores() {
        let state = play(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopCenter),
            (Player::O, Position::BottomLeft),
            (Player::X, Position::TopRight),
        ]);
        let t = state.apply(&Action::NewGame).unwrap();
        let fresh = t.state();
        assert_eq!(fresh.board(), &Board::new());
        assert_eq!(fresh.current_player(), Player::X);
        assert_eq!(fresh.status(), Status::InProgress);
        assert_eq!(fresh.win_line(), None);
        assert_eq!(fresh.scores(), state.scores());
        assert!(t.emitted(GameEvent::NewRound));
    }
}
