#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use grid::*;
pub use query::*;
pub use types::*;

mod error;
mod grid;
mod query;
mod types;

/// Dimensions of the playable (unpadded) grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: Coord,
    pub height: Coord,
}

impl GridConfig {
    /// Largest usable axis size; the padded border ring must still be
    /// addressable in `Coord` space.
    pub const MAX_DIM: Coord = Coord::MAX - 1;

    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
