//! Turn protocol and session state for Dots & Boxes.

use crate::invariants::DotsBoxesInvariants;
use crate::{Action, Grid, LineId, MoveError, Player, Topology};
use duel_core::{
    GameEvent, Outcome, Scoreboard, Seat, Status, Transition, TurnBased, enforce_invariants,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Boxes collected per player, summed over every round of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scores {
    boxes: [u32; 2],
}

impl Scores {
    /// Returns the boxes `player` has collected.
    pub fn get(&self, player: Player) -> u32 {
        self.boxes[player.index()]
    }

    /// Returns a copy with `count` boxes credited to `player`.
    pub fn credit(mut self, player: Player, count: u32) -> Self {
        self.boxes[player.index()] += count;
        self
    }
}

/// Rounds won per player plus drawn rounds.
pub type RoundScores = Scoreboard<Player>;

/// Session state for Dots & Boxes.
///
/// The grid shape comes from the [`Topology`] chosen when the session
/// started and survives new rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) current_player: Player,
    pub(crate) status: Status<Player>,
    pub(crate) scores: Scores,
    pub(crate) rounds: RoundScores,
}

impl GameState {
    /// Creates a standard 5x5-dot game.
    pub fn new() -> Self {
        Self::with_topology(Topology::default())
    }

    /// Creates a game on the given grid shape.
    #[instrument]
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            grid: Grid::new(topology),
            current_player: Player::first(),
            status: Status::InProgress,
            scores: Scores::default(),
            rounds: RoundScores::new(),
        }
    }

    /// Returns the lines and boxes.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> Status<Player> {
        self.status
    }

    /// True once every box has an owner.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns boxes collected over the whole session.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns rounds won and drawn over the whole session.
    pub fn rounds(&self) -> &RoundScores {
        &self.rounds
    }

    /// Returns boxes `player` owns in the current round.
    pub fn round_score(&self, player: Player) -> usize {
        self.grid.boxes_owned_by(player)
    }

    /// Decides a finished round by the session box totals: strictly more
    /// wins, equal draws.
    fn round_outcome(&self) -> Outcome<Player> {
        let one = self.scores.get(Player::One);
        let two = self.scores.get(Player::Two);
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    #[instrument(skip(self, line), fields(line = %line))]
    fn claim(&self, player: Player, line: LineId) -> Result<Transition<Self>, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.current_player {
            return Err(MoveError::NotYourTurn(player));
        }

        let claimed = self.grid.claim_line(line, player)?;
        let (grid, completed) = claimed.resolve_boxes(player);
        // One line borders at most two boxes.
        let count = completed.len() as u8;

        let mut next = Self {
            grid,
            scores: self.scores.credit(player, u32::from(count)),
            ..self.clone()
        };
        let mut events = vec![GameEvent::MoveAccepted];
        debug!(%player, completed = count, "Line claimed");

        if count > 0 {
            events.push(GameEvent::BoxesCompleted(count));
        }

        if next.grid.all_boxes_owned() {
            let outcome = next.round_outcome();
            info!(
                %outcome,
                one = next.scores.get(Player::One),
                two = next.scores.get(Player::Two),
                "All boxes owned"
            );
            next.status = Status::Finished(outcome);
            next.rounds = next.rounds.record(&outcome);
            events.push(match outcome {
                Outcome::Winner(_) => GameEvent::Won,
                Outcome::Draw => GameEvent::Draw,
            });
        } else if count == 0 {
            next.current_player = player.opponent();
            events.push(GameEvent::TurnPassed);
        } else {
            events.push(GameEvent::ExtraTurn);
        }

        enforce_invariants::<DotsBoxesInvariants, _>(&next);
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
        match *action {
            Action::Claim { player, line } => self.claim(player, line),
            Action::NewGame => Ok(Transition::new(self.new_round(), vec![GameEvent::NewRound])),
        }
    }

    #[instrument(skip(self))]
    fn new_round(&self) -> Self {
        info!(rounds = self.rounds.rounds(), "Starting new round");
        Self {
            scores: self.scores,
            rounds: self.rounds,
            ..Self::with_topology(self.grid.topology())
        }
    }
}
