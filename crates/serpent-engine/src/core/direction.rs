use std::str::FromStr;

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

/// One of the four headings the snake can move in.
///
/// Directions are labelled with upper-case names (`"UP"`, `"DOWN"`,
/// `"LEFT"`, `"RIGHT"`) both when displayed and when serialized. Parsing a
/// label ignores ASCII case.
///
/// # Example
///
/// ```
/// use serpent_engine::Direction;
///
/// assert_eq!(Direction::Up.opposite(), Direction::Down);
/// assert_eq!(Direction::Left.displacement(), (0, -1));
/// assert_eq!(Direction::from_label("right"), Some(Direction::Right));
/// assert_eq!(Direction::from_label("sideways"), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    #[display("UP")]
    #[serde(rename = "UP")]
    Up = 0,
    #[display("DOWN")]
    #[serde(rename = "DOWN")]
    Down = 1,
    #[display("LEFT")]
    #[serde(rename = "LEFT")]
    Left = 2,
    #[display("RIGHT")]
    #[serde(rename = "RIGHT")]
    Right = 3,
}

const OPPOSITES: [Direction; Direction::LEN] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

const DISPLACEMENTS: [(i32, i32); Direction::LEN] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const LABELS: [&str; Direction::LEN] = ["UP", "DOWN", "LEFT", "RIGHT"];

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::LEN)]
    }
}

impl Direction {
    /// Number of directions (4).
    pub const LEN: usize = 4;

    /// All directions, in label order.
    pub const ALL: [Self; Self::LEN] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Position of this direction in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        OPPOSITES[self.index()]
    }

    #[must_use]
    pub const fn is_opposite(self, other: Self) -> bool {
        self.opposite().index() == other.index()
    }

    /// Unit `(row, column)` step taken when moving this way.
    #[must_use]
    pub const fn displacement(self) -> (i32, i32) {
        DISPLACEMENTS[self.index()]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Looks up a direction by label after full Unicode upper-casing.
    ///
    /// Surrounding whitespace is not stripped: `" up"` is not a label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_uppercase();
        Self::ALL.into_iter().find(|dir| dir.as_str() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction label: {label:?}")]
pub struct ParseDirectionError {
    #[error(not(source))]
    label: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseDirectionError {
            label: s.to_owned(),
        })
    }
}
