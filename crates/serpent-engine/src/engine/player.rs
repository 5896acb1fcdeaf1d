use super::{Action, Sensor};

/// An agent that steers the snake.
///
/// The engine calls [`Player::decide`] once per tick with a fresh
/// [`Sensor`] snapshot and never looks at the player's own state.
/// Errors are returned to the caller of [`Game::play`](super::Game::play)
/// as-is.
pub trait Player {
    type Error;

    fn decide(&mut self, sensor: &Sensor) -> Result<Action, Self::Error>;
}

impl<P> Player for &mut P
where
    P: Player + ?Sized,
{
    type Error = P::Error;

    fn decide(&mut self, sensor: &Sensor) -> Result<Action, Self::Error> {
        (**self).decide(sensor)
    }
}

impl<P> Player for Box<P>
where
    P: Player + ?Sized,
{
    type Error = P::Error;

    fn decide(&mut self, sensor: &Sensor) -> Result<Action, Self::Error> {
        (**self).decide(sensor)
    }
}
