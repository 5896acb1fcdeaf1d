//! Built-in players.
//!
//! - [`GreedyPlayer`] - Heads for the food along the longer axis, sidestepping danger
//! - [`FixedDirectionPlayer`] - Sends the same action every tick
//! - [`FnPlayer`] - Wraps a closure as a player

use std::convert::Infallible;

use serpent_engine::{Action, Direction, Player, Sensor};

/// Order in which [`GreedyPlayer`] tries escape moves.
const ESCAPE_ORDER: [Direction; Direction::LEN] = [
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
];

/// Baseline policy: move toward the food, avoid immediate death.
///
/// Each tick it picks the axis with the larger distance to the food
/// (vertical on ties) and steps toward the food along it. If that move is
/// fatal it takes the first safe move in the order up, right, down, left; if
/// every move is fatal it keeps the greedy choice.
///
/// The player is stateless. It does not account for the engine ignoring
/// reversals, so it can chase food straight into a wall behind it.
///
/// # Example
///
/// ```
/// use serpent_engine::{EpisodeSeed, Game, GameConfig};
/// use serpent_evaluator::player::GreedyPlayer;
///
/// let mut game = Game::new(GameConfig::default());
/// let result = game.play(GreedyPlayer, Some(EpisodeSeed::from(0))).unwrap();
/// assert!(result.steps <= 200);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    /// The direction chosen for `sensor`.
    #[must_use]
    pub fn choose(sensor: &Sensor) -> Direction {
        let (dr, dc) = sensor.food_vec;
        let toward_food = if dr.abs() >= dc.abs() {
            if dr < 0 { Direction::Up } else { Direction::Down }
        } else if dc < 0 {
            Direction::Left
        } else {
            Direction::Right
        };

        if sensor.danger.is_safe(toward_food) {
            return toward_food;
        }
        ESCAPE_ORDER
            .into_iter()
            .find(|dir| sensor.danger.is_safe(*dir))
            .unwrap_or(toward_food)
    }
}

impl Player for GreedyPlayer {
    type Error = Infallible;

    fn decide(&mut self, sensor: &Sensor) -> Result<Action, Self::Error> {
        Ok(Action::Move(Self::choose(sensor)))
    }
}

/// Returns the same action on every tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixedDirectionPlayer {
    action: Action,
}

impl FixedDirectionPlayer {
    #[must_use]
    pub fn new<A>(action: A) -> Self
    where
        A: Into<Action>,
    {
        Self {
            action: action.into(),
        }
    }
}

impl Player for FixedDirectionPlayer {
    type Error = Infallible;

    fn decide(&mut self, _sensor: &Sensor) -> Result<Action, Self::Error> {
        Ok(self.action)
    }
}

/// A player backed by a closure.
///
/// # Example
///
/// ```
/// use serpent_engine::{Action, EpisodeSeed, Game, GameConfig};
/// use serpent_evaluator::player::FnPlayer;
///
/// let player = FnPlayer::new(|sensor: &serpent_engine::Sensor| {
///     let label = if sensor.steps % 2 == 0 { "UP" } else { "LEFT" };
///     Ok::<_, std::convert::Infallible>(Action::from(label))
/// });
/// let mut game = Game::new(GameConfig::default());
/// game.play(player, Some(EpisodeSeed::from(1))).unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPlayer<F>(F);

impl<F> FnPlayer<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F, E> Player for FnPlayer<F>
where
    F: FnMut(&Sensor) -> Result<Action, E>,
{
    type Error = E;

    fn decide(&mut self, sensor: &Sensor) -> Result<Action, Self::Error> {
        (self.0)(sensor)
    }
}
