use std::collections::VecDeque;

use super::grid::Cell;

/// The snake body, head first.
///
/// A snake always has at least one cell. The engine keeps the cells pairwise
/// distinct while the episode is alive; the type itself only guarantees
/// non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// A one-cell snake.
    #[must_use]
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Builds a snake from cells listed head first.
    ///
    /// Returns `None` if `cells` is empty.
    pub fn from_cells<I>(cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Cells from head to tail.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}
