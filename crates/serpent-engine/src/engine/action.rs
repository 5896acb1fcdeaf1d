use crate::core::Direction;

/// What a player asks the snake to do on the next tick.
///
/// Any text label converts into an action without failing: a recognized
/// direction label (case-insensitive) becomes [`Action::Move`], everything
/// else becomes [`Action::Continue`].
///
/// # Example
///
/// ```
/// use serpent_engine::{Action, Direction};
///
/// assert_eq!(Action::from("left"), Action::Move(Direction::Left));
/// assert_eq!(Action::from("jump"), Action::Continue);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Action {
    /// Head towards the given direction.
    Move(Direction),
    /// Keep going in the current direction.
    #[default]
    Continue,
}

impl Action {
    /// The direction this action resolves to when the snake currently faces `current`.
    ///
    /// A reversal onto the snake's own neck is never honoured: asking for the
    /// opposite of `current` yields `current`.
    #[must_use]
    pub fn resolve(self, current: Direction) -> Direction {
        match self {
            Self::Move(dir) if !dir.is_opposite(current) => dir,
            Self::Move(_) | Self::Continue => current,
        }
    }
}

impl From<Direction> for Action {
    fn from(dir: Direction) -> Self {
        Self::Move(dir)
    }
}

impl From<&str> for Action {
    fn from(label: &str) -> Self {
        Direction::from_label(label).map_or(Self::Continue, Self::Move)
    }
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}
