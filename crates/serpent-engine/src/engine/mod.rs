//! Episode state, the step transition and the episode runner.
//!
//! - [`GameConfig`] - Grid size and step budget
//! - [`EpisodeSeed`] - Seed for the episode random source
//! - [`EpisodeState`] - Canonical board state with the step transition
//! - [`Sensor`] - Per-tick snapshot handed to players
//! - [`Player`] - The single-method capability that steers the snake
//! - [`Game`] - Owns one episode and its random source; runs whole episodes
//!
//! # Tick
//!
//! Each call to [`Game::step`] (or [`EpisodeState::step`]):
//!
//! 1. Does nothing once the episode has ended
//! 2. Resolves the action, turning a reversal into "keep going"
//! 3. Moves the head one cell and counts the step
//! 4. Ends the episode on a wall or body collision, leaving the body as it was
//! 5. Otherwise grows onto the food (and places new food) or drops the tail
//! 6. Ends the episode when the step budget is used up
//!
//! # Example
//!
//! ```
//! use serpent_engine::{Direction, EpisodeSeed, Game, GameConfig};
//!
//! let mut game = Game::with_seed(GameConfig::default(), EpisodeSeed::from(0));
//! game.reset().unwrap();
//!
//! let sensor = game.sensor().unwrap();
//! let turn = if sensor.danger[Direction::Up] { "DOWN" } else { "UP" };
//! game.step(turn).unwrap();
//!
//! assert_eq!(game.state().unwrap().steps(), 1);
//! ```

pub use self::{action::*, config::*, episode::*, game::*, player::*, seed::*, sensor::*};

mod action;
mod config;
mod episode;
mod game;
mod player;
mod seed;
mod sensor;
