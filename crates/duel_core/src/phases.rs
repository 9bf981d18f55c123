//! Game phases shared by every game.
//!
//! A game is either in progress or finished with an outcome. The
//! transition is one-way: once a status is `Finished` no further moves
//! are accepted until a new round is started.

use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<P> {
    /// Player won the game.
    Winner(P),
    /// Game ended in a draw.
    Draw,
}

impl<P: Copy> Outcome<P> {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<P> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl<P: std::fmt::Debug> std::fmt::Display for Outcome<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status<P> {
    /// Game is ongoing.
    InProgress,
    /// Game has ended.
    Finished(Outcome<P>),
}

impl<P: Copy> Status<P> {
    /// Returns true once the game has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Finished(_))
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome<P>> {
        match self {
            Status::InProgress => None,
            Status::Finished(outcome) => Some(*outcome),
        }
    }

    /// Returns the winner of a finished game, if it was not a draw.
    pub fn winner(&self) -> Option<P> {
        self.outcome().and_then(|outcome| outcome.winner())
    }
}

impl<P> Default for Status<P> {
    fn default() -> Self {
        Status::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_is_not_terminal() {
        let status: Status<u8> = Status::InProgress;
        assert!(!status.is_terminal());
        assert_eq!(status.outcome(), None);
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_finished_winner() {
        let status = Status::Finished(Outcome::Winner('x'));
        assert!(status.is_terminal());
        assert_eq!(status.winner(), Some('x'));
    }

    #[test]
    fn test_finished_draw_has_no_winner() {
        let status: Status<char> = Status::Finished(Outcome::Draw);
        assert!(status.is_terminal());
        assert!(status.outcome().is_some_and(|o| o.is_draw()));
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner('x').to_string(), "Player 'x' wins");
        assert_eq!(Outcome::<char>::Draw.to_string(), "Draw");
    }
}
