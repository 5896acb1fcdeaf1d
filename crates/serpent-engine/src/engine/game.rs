use rand::Rng as _;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{BoardFullError, GameError, NotResetError, PlayError};

use super::{Action, EpisodeSeed, EpisodeState, GameConfig, Player, Sensor, StepOutcome};

/// Final outcome of an episode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Food items eaten.
    pub score: usize,
    /// Ticks applied, including the one that ended the episode.
    pub steps: usize,
}

/// The simulation engine: one episode state plus its random source.
///
/// A new engine has no episode yet; call [`Game::reset`] (or
/// [`Game::play`], which resets for you) before stepping.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: Pcg32,
    state: Option<EpisodeState>,
}

impl Game {
    /// Creates an engine with a random seed.
    ///
    /// For reproducible episodes use [`Self::with_seed`] or pass a seed to
    /// [`Self::play`].
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(config: GameConfig, seed: EpisodeSeed) -> Self {
        Self {
            config,
            rng: seed.rng(),
            state: None,
        }
    }

    /// Wraps an existing episode, e.g. one built with
    /// [`EpisodeState::from_layout`].
    #[must_use]
    pub fn from_state(state: EpisodeState, seed: EpisodeSeed) -> Self {
        Self {
            config: *state.config(),
            rng: seed.rng(),
            state: Some(state),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Restarts the random source from `seed`. The current episode is kept.
    pub fn reseed(&mut self, seed: EpisodeSeed) {
        self.rng = seed.rng();
    }

    /// Starts a new episode, discarding the previous one.
    pub fn reset(&mut self) -> Result<&EpisodeState, BoardFullError> {
        let state = EpisodeState::reset(self.config, &mut self.rng)?;
        Ok(self.state.insert(state))
    }

    pub fn state(&self) -> Result<&EpisodeState, NotResetError> {
        self.state.as_ref().ok_or(NotResetError)
    }

    pub fn sensor(&self) -> Result<Sensor, NotResetError> {
        Ok(self.state()?.sensor())
    }

    /// Applies one tick. Unrecognized labels convert to [`Action::Continue`].
    pub fn step<A>(&mut self, action: A) -> Result<StepOutcome, GameError>
    where
        A: Into<Action>,
    {
        let state = self.state.as_mut().ok_or(NotResetError)?;
        Ok(state.step(action.into(), &mut self.rng)?)
    }

    /// Runs a whole episode with `player` and returns its score and length.
    ///
    /// When `seed` is given the random source is reseeded before the reset,
    /// so the initial direction and every food placement are reproducible.
    /// The loop performs at most `max_steps` calls to `step`.
    pub fn play<P>(
        &mut self,
        player: P,
        seed: Option<EpisodeSeed>,
    ) -> Result<EpisodeResult, PlayError<P::Error>>
    where
        P: Player,
    {
        if let Some(seed) = seed {
            self.reseed(seed);
        }
        self.reset()?;
        self.run(player)
    }

    /// Drives the current episode with `player` until it ends.
    ///
    /// Unlike [`Self::play`] nothing is reset, so an episode built with
    /// [`Self::from_state`] is played from its layout. An already finished
    /// episode returns its result without asking the player.
    pub fn run<P>(&mut self, mut player: P) -> Result<EpisodeResult, PlayError<P::Error>>
    where
        P: Player,
    {
        let state = self
            .state
            .as_mut()
            .ok_or(GameError::NotReset(NotResetError))?;
        while state.is_alive() {
            let sensor = state.sensor();
            let action = player.decide(&sensor).map_err(PlayError::Player)?;
            state.step(action, &mut self.rng)?;
        }
        Ok(EpisodeResult {
            score: state.score(),
            steps: state.steps(),
        })
    }
}
