use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Classification of a single point query against an annotated grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOutcome {
    HitMine,
    NeighborCount(u8),
    Revealed(CellCount),
}

impl Grid {
    /// Classifies the interior cell at unpadded `coords`.
    ///
    /// Mines report [`QueryOutcome::HitMine`], numbered cells report their
    /// count, and zero-count cells trigger a flood-fill reveal whose total is
    /// reported as [`QueryOutcome::Revealed`]. The grid is never mutated, so
    /// repeated queries of the same coordinate agree.
    pub fn query(&self, coords: Coord2) -> Result<QueryOutcome> {
        let padded = self.validate_coords(coords)?;

        match self.cells[padded.to_nd_index()] {
            Cell::Mine => Ok(QueryOutcome::HitMine),
            Cell::Empty(0) => Ok(QueryOutcome::Revealed(self.reveal_count(padded))),
            Cell::Empty(count @ 1..=8) => Ok(QueryOutcome::NeighborCount(count)),
            // validate_coords rules out the border ring and annotation caps
            // counts at 8, so reaching this arm means the builder is broken
            Cell::Empty(_) | Cell::Border => Err(GridError::Internal),
        }
    }

    /// Counts the cells revealed by opening the zero-count cell at padded
    /// `origin`: the maximal connected zero-region plus its bordering numbered
    /// cells, each counted exactly once.
    ///
    /// Work-list traversal over a per-call visited mask; nothing leaks between
    /// queries. Border cells absorb edge lookups and mines contribute nothing,
    /// though a mine can never actually neighbor a zero-count cell.
    fn reveal_count(&self, origin: Coord2) -> CellCount {
        let mut visited = Array2::from_elem(self.cells.raw_dim(), false);
        let mut to_visit = VecDeque::from([origin]);
        let mut revealed: CellCount = 0;

        while let Some(coords) = to_visit.pop_front() {
            if visited[coords.to_nd_index()] {
                continue;
            }

            match self.cells[coords.to_nd_index()] {
                Cell::Border | Cell::Mine => continue,
                Cell::Empty(count) => {
                    visited[coords.to_nd_index()] = true;
                    revealed += 1;

                    if count == 0 {
                        to_visit.extend(self.iter_neighbors(coords));
                    }
                }
            }
        }

        log::trace!("flood fill from {:?} revealed {} cells", origin, revealed);
        revealed
    }
}
