//! Players and multi-episode scoring on top of `serpent-engine`.
//!
//! The crate has two levels:
//!
//! 1. **Players** ([`player`]) - Ready-made implementations of the engine's
//!    [`Player`](serpent_engine::Player) trait: the greedy baseline, a
//!    fixed-direction player and a closure adapter.
//!
//! 2. **Episode Evaluation** ([`episode_evaluator`]) - Runs a player over a
//!    fixed range of seeds, one fresh player per episode, and summarizes
//!    scores and step counts.
//!
//! # Architecture
//!
//! ```text
//! EpisodeEvaluator (seeds 0..N, aggregate)
//!     ↓ uses
//! Game::play (one episode)
//!     ↓ asks
//! Player::decide (one tick)
//! ```
//!
//! Loading players from external sources is left to the embedding harness:
//! anything that can build a `Player` on demand can be evaluated.

pub mod episode_evaluator;
pub mod player;
