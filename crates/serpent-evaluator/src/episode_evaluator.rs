//! Multi-episode evaluation: scoring a player over a fixed set of seeds.
//!
//! # How It Works
//!
//! 1. **Build** - A fresh player is constructed for every episode, so no state
//!    leaks between episodes
//! 2. **Play** - Episode `i` runs with seed `i`, for `i` in `0..episodes`
//! 3. **Summarize** - Scores and step counts are reduced to descriptive statistics;
//!    each episode keeps its seed and end cause so it can be replayed
//!
//! Seeds are fixed, so evaluating the same deterministic player twice gives
//! identical reports.
//!
//! # Usage
//!
//! ```
//! use serpent_evaluator::{episode_evaluator::EpisodeEvaluator, player::GreedyPlayer};
//!
//! let evaluator = EpisodeEvaluator::default();
//! let report = evaluator.evaluate(|| GreedyPlayer).unwrap();
//!
//! assert_eq!(report.episodes.len(), 5);
//! println!("avg score {:.2}, avg steps {:.2}", report.avg_score(), report.avg_steps());
//! ```

use serde::{Deserialize, Serialize};
use serpent_engine::{EndCause, EpisodeResult, EpisodeSeed, Game, GameConfig, PlayError, Player};
use serpent_stats::descriptive::DescriptiveStats;
use tracing::{debug, info};

/// Failure of an evaluation run.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum EvaluateError<E> {
    /// The evaluator was configured with zero episodes.
    #[display("evaluation needs at least one episode")]
    NoEpisodes,
    /// An episode failed; the remaining episodes were not played.
    #[display("episode with seed {seed} failed: {source}")]
    Play { seed: u64, source: PlayError<E> },
}

/// Plays a batch of seeded episodes and aggregates the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeEvaluator {
    pub config: GameConfig,
    pub episodes: u64,
}

impl Default for EpisodeEvaluator {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            episodes: Self::DEFAULT_EPISODES,
        }
    }
}

impl EpisodeEvaluator {
    pub const DEFAULT_EPISODES: u64 = 5;

    #[must_use]
    pub const fn new(config: GameConfig, episodes: u64) -> Self {
        Self { config, episodes }
    }

    /// Evaluates players produced by `new_player`, one per episode.
    pub fn evaluate<F, P>(
        &self,
        mut new_player: F,
    ) -> Result<EvaluationReport, EvaluateError<P::Error>>
    where
        F: FnMut() -> P,
        P: Player,
    {
        let mut game = Game::new(self.config);
        let mut episodes = vec![];
        for index in 0..self.episodes {
            let seed = EpisodeSeed::from(index);
            let result = game
                .play(new_player(), Some(seed))
                .map_err(|source| EvaluateError::Play {
                    seed: index,
                    source,
                })?;
            let end_cause = game.state().ok().and_then(|s| s.end_cause());
            debug!(
                %seed,
                score = result.score,
                steps = result.steps,
                cause = ?end_cause,
                "episode finished"
            );
            episodes.push(EpisodeRecord {
                seed,
                end_cause,
                result,
            });
        }

        let report = EvaluationReport::new(episodes).ok_or(EvaluateError::NoEpisodes)?;
        info!(
            episodes = report.episodes.len(),
            avg_score = report.avg_score(),
            avg_steps = report.avg_steps(),
            "evaluation finished"
        );
        Ok(report)
    }
}

/// One evaluated episode.
///
/// Serializes flat, e.g.
/// `{"seed":"0000…0001","end_cause":"wall","score":2,"steps":31}`; the seed
/// replays the episode with [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub seed: EpisodeSeed,
    pub end_cause: Option<EndCause>,
    #[serde(flatten)]
    pub result: EpisodeResult,
}

/// Per-episode records plus their summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub episodes: Vec<EpisodeRecord>,
    pub score: DescriptiveStats,
    pub steps: DescriptiveStats,
}

impl EvaluationReport {
    /// Summarizes `episodes`; `None` when there are none.
    #[must_use]
    pub fn new(episodes: Vec<EpisodeRecord>) -> Option<Self> {
        let score = DescriptiveStats::from_counts(episodes.iter().map(|e| e.result.score))?;
        let steps = DescriptiveStats::from_counts(episodes.iter().map(|e| e.result.steps))?;
        Some(Self {
            episodes,
            score,
            steps,
        })
    }

    #[must_use]
    pub fn avg_score(&self) -> f64 {
        self.score.mean
    }

    #[must_use]
    pub fn avg_steps(&self) -> f64 {
        self.steps.mean
    }

    /// The headline numbers only.
    #[must_use]
    pub fn summary(&self) -> EvaluationSummary {
        EvaluationSummary {
            avg_score: self.avg_score(),
            avg_steps: self.avg_steps(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub avg_score: f64,
    pub avg_steps: f64,
}
