use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A `(row, column)` position, with `(0, 0)` at the top-left.
///
/// Coordinates are signed so that a position one step past the border can
/// still be represented and checked against the [`Grid`].
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
#[display("({row}, {col})")]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step towards `dir`.
    #[must_use]
    pub const fn moved(self, dir: Direction) -> Self {
        let (dr, dc) = dir.displacement();
        Self::new(self.row + dr, self.col + dc)
    }

    /// `(Δrow, Δcol)` pointing from `self` to `other`.
    #[must_use]
    pub const fn offset_to(self, other: Self) -> (i32, i32) {
        (other.row - self.row, other.col - self.col)
    }
}

/// Dimensions of the rectangular playing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u16,
    cols: u16,
}

impl Grid {
    #[must_use]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    #[must_use]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    /// The cell at `(rows / 2, cols / 2)`, rounding down.
    #[must_use]
    pub fn center(&self) -> Cell {
        Cell::new(i32::from(self.rows) / 2, i32::from(self.cols) / 2)
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..i32::from(self.rows)).contains(&cell.row)
            && (0..i32::from(self.cols)).contains(&cell.col)
    }

    /// Every cell of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }
}
