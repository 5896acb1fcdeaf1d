//! Grid geometry shared by the engine and by players.
//!
//! - [`Direction`] - The four headings, with opposite and displacement tables
//! - [`Cell`] - A signed `(row, column)` position
//! - [`Grid`] - Field dimensions and bounds checks
//! - [`Snake`] - The ordered snake body, head first

pub use self::{direction::*, grid::*, snake::*};

pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod snake;
