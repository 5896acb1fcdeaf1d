use serde::{Deserialize, Serialize};

use crate::{InvalidConfigError, core::Grid};

/// Per-episode settings: grid size and step budget.
///
/// Every field must be positive. Grids of at least 3×3 are recommended so
/// the centre start cell always has a safe move.
///
/// # Example
///
/// ```
/// use serpent_engine::GameConfig;
///
/// let config = GameConfig::new(12, 12, 200).unwrap();
/// assert_eq!(config, GameConfig::default());
/// assert!(GameConfig::new(0, 12, 200).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameConfig", into = "UncheckedGameConfig")]
pub struct GameConfig {
    grid: Grid,
    max_steps: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct UncheckedGameConfig {
    rows: u16,
    cols: u16,
    max_steps: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}

impl GameConfig {
    pub const DEFAULT_ROWS: u16 = 12;
    pub const DEFAULT_COLS: u16 = 12;
    pub const DEFAULT_MAX_STEPS: usize = 200;

    pub fn new(rows: u16, cols: u16, max_steps: usize) -> Result<Self, InvalidConfigError> {
        if rows == 0 {
            return Err(InvalidConfigError::ZeroRows);
        }
        if cols == 0 {
            return Err(InvalidConfigError::ZeroCols);
        }
        if max_steps == 0 {
            return Err(InvalidConfigError::ZeroMaxSteps);
        }
        Ok(Self {
            grid: Grid::new(rows, cols),
            max_steps,
        })
    }

    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.grid.rows()
    }

    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.grid.cols()
    }

    #[must_use]
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl TryFrom<UncheckedGameConfig> for GameConfig {
    type Error = InvalidConfigError;

    fn try_from(value: UncheckedGameConfig) -> Result<Self, Self::Error> {
        Self::new(value.rows, value.cols, value.max_steps)
    }
}

impl From<GameConfig> for UncheckedGameConfig {
    fn from(value: GameConfig) -> Self {
        Self {
            rows: value.rows(),
            cols: value.cols(),
            max_steps: value.max_steps,
        }
    }
}
