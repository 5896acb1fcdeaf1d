//! Deterministic head-less Snake engine for scoring autonomous players.
//!
//! The crate is split the same way the simulation is:
//!
//! - [`core`] - Grid geometry: [`Direction`], [`Cell`], [`Grid`] and the [`Snake`] body
//! - [`engine`] - Episode state, the step transition, sensors and the episode runner
//!
//! # Example
//!
//! ```
//! use serpent_engine::{Action, EpisodeSeed, Game, GameConfig, Player, Sensor};
//!
//! struct Straight;
//!
//! impl Player for Straight {
//!     type Error = std::convert::Infallible;
//!
//!     fn decide(&mut self, _sensor: &Sensor) -> Result<Action, Self::Error> {
//!         Ok(Action::Continue)
//!     }
//! }
//!
//! let mut game = Game::new(GameConfig::default());
//! let result = game.play(Straight, Some(EpisodeSeed::from(0))).unwrap();
//! assert!(result.steps <= 200);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// No free cell is left on the grid to place food on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no free cell left to place food")]
pub struct BoardFullError;

/// The engine was used before the first episode was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("game has not been reset yet")]
pub struct NotResetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfigError {
    #[display("grid must have at least one row")]
    ZeroRows,
    #[display("grid must have at least one column")]
    ZeroCols,
    #[display("step limit must be positive")]
    ZeroMaxSteps,
}

/// A hand-built episode layout violates the board invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidLayoutError {
    #[display("snake must have at least one cell")]
    EmptySnake,
    #[display("snake cell {_0} is outside the grid")]
    SnakeOutOfBounds(#[error(not(source))] Cell),
    #[display("snake occupies {_0} more than once")]
    SnakeOverlap(#[error(not(source))] Cell),
    #[display("food {_0} is outside the grid")]
    FoodOutOfBounds(#[error(not(source))] Cell),
    #[display("food {_0} lies on the snake")]
    FoodOnSnake(#[error(not(source))] Cell),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    #[display("{_0}")]
    NotReset(NotResetError),
    #[display("{_0}")]
    BoardFull(BoardFullError),
}

/// Failure of a whole episode run by [`Game::play`].
///
/// Player errors are handed back untouched; the engine never retries.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayError<E> {
    #[display("game failed: {_0}")]
    Game(GameError),
    #[display("player failed: {_0}")]
    Player(E),
}

impl<E> From<GameError> for PlayError<E> {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl<E> From<BoardFullError> for PlayError<E> {
    fn from(err: BoardFullError) -> Self {
        Self::Game(GameError::BoardFull(err))
    }
}
