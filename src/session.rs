//! The single active game a player interacts with.

use crate::{AnyAction, AnyGame, ConfigError, GameKind, Phase, RulesConfig};
use duel_core::GameEvent;
use duel_dots_boxes::{self as dots_boxes, Topology};
use tracing::{debug, info, instrument};

/// Owns whichever game is on screen.
///
/// Selecting a game always starts it fresh with zero scores; only
/// [`Session::new_game`] (or the game's own new-game action) keeps them.
#[derive(Debug, Clone)]
pub struct Session {
    game: AnyGame,
    topology: Topology,
}

impl Session {
    /// Starts a session on `kind` with default rules.
    pub fn new(kind: GameKind) -> Self {
        Self::start(kind, Topology::default())
    }

    /// Starts a session on `kind` with rules from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured grid size is unsupported.
    pub fn with_config(kind: GameKind, config: &RulesConfig) -> Result<Self, ConfigError> {
        let topology = config.dots_and_boxes().topology()?;
        Ok(Self::start(kind, topology))
    }

    #[instrument]
    fn start(kind: GameKind, topology: Topology) -> Self {
        info!(%kind, "Starting session");
        Self {
            game: Self::fresh(kind, topology),
            topology,
        }
    }

    fn fresh(kind: GameKind, topology: Topology) -> AnyGame {
        match kind {
            GameKind::DotsAndBoxes => dots_boxes::GameState::with_topology(topology).into(),
            other => AnyGame::new(other),
        }
    }

    /// Returns the active game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Returns which game is active.
    pub fn kind(&self) -> GameKind {
        self.game.kind()
    }

    /// Switches to `kind`, discarding the current game and its scores.
    #[instrument(skip(self), fields(from = %self.kind()))]
    pub fn select(&mut self, kind: GameKind) {
        info!(to = %kind, "Selecting game");
        self.game = Self::fresh(kind, self.topology);
    }

    /// Runs `action` through the active game and returns what happened.
    ///
    /// Refused actions leave the game untouched and yield a single
    /// [`GameEvent::Rejected`].
    #[instrument(skip(self), fields(game = %self.kind()))]
    pub fn dispatch(&mut self, action: AnyAction) -> Vec<GameEvent> {
        let (game, events) = self.game.reduce(&action).into_parts();
        debug!(?events, "Dispatched");
        if events.iter().any(GameEvent::is_terminal) {
            info!(phase = ?Phase::from(&game), "Round finished");
        }
        self.game = game;
        events
    }

    /// Starts another round of the active game, keeping scores.
    pub fn new_game(&mut self) -> Vec<GameEvent> {
        self.dispatch(AnyAction::new_game(self.kind()))
    }
}
