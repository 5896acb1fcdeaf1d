use std::ops::Index;

use serde::{Serialize, Serializer, ser::SerializeMap as _};

use crate::core::Direction;

/// Per-direction flags: `true` when moving that way next tick is fatal.
///
/// Serializes as a map from direction label to flag, e.g.
/// `{"UP":false,"DOWN":true,"LEFT":false,"RIGHT":false}`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Danger([bool; Direction::LEN]);

impl Danger {
    /// Builds the flags by evaluating `is_fatal` for every direction.
    pub fn from_fn<F>(mut is_fatal: F) -> Self
    where
        F: FnMut(Direction) -> bool,
    {
        Self(Direction::ALL.map(&mut is_fatal))
    }

    #[must_use]
    pub fn is_dangerous(&self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    #[must_use]
    pub fn is_safe(&self, dir: Direction) -> bool {
        !self.is_dangerous(dir)
    }

    /// Directions that are not fatal, in [`Direction::ALL`] order.
    pub fn safe_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| self.is_safe(*dir))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, bool)> + '_ {
        Direction::ALL.into_iter().map(|dir| (dir, self.0[dir.index()]))
    }
}

impl Index<Direction> for Danger {
    type Output = bool;

    fn index(&self, dir: Direction) -> &Self::Output {
        &self.0[dir.index()]
    }
}

impl Serialize for Danger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Direction::LEN))?;
        for (dir, fatal) in self.iter() {
            map.serialize_entry(dir.as_str(), &fatal)?;
        }
        map.end()
    }
}

/// Read-only view of the board handed to a player each tick.
///
/// The field names are a stable contract for players:
///
/// - `food_vec` - `(Δrow, Δcol)` from the head to the food
/// - `danger` - fatal-move flag for each direction
/// - `current_dir` - direction the snake is facing
/// - `length` - number of snake cells
/// - `steps` - ticks elapsed so far
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Sensor {
    pub food_vec: (i32, i32),
    pub danger: Danger,
    pub current_dir: Direction,
    pub length: usize,
    pub steps: usize,
}
