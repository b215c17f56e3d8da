use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

pub const MINE_MARKER: char = 'X';
pub const EMPTY_MARKER: char = '.';

/// State of a single cell in the padded, annotated grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    Empty(u8),
    Border,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// A mine grid with a one-cell border ring and per-cell neighbor-mine counts.
///
/// The backing array is `(height + 2) × (width + 2)`; interior cells live at
/// padded rows `1..=height` and padded columns `1..=width`. The `Border` ring is
/// never a mine and never queried, which lets neighbor counting and flood fill
/// address all 8 neighbors of any interior cell without bounds checks.
///
/// Immutable once built; queries never change cell states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    config: GridConfig,
}

impl Grid {
    /// Parses `rows` into a padded grid and annotates every non-mine interior
    /// cell with its neighbor-mine count.
    ///
    /// Expects exactly `config.height` rows whose first `config.width`
    /// characters are each [`MINE_MARKER`] or [`EMPTY_MARKER`]; anything else
    /// is rejected with [`GridError::InvalidInput`]. Trailing characters past
    /// `config.width` are ignored.
    pub fn build<S: AsRef<str>>(rows: &[S], config: GridConfig) -> Result<Self> {
        if config.is_empty()
            || config.width > GridConfig::MAX_DIM
            || config.height > GridConfig::MAX_DIM
            || rows.len() != usize::from(config.height)
        {
            return Err(GridError::InvalidInput);
        }

        let padded_dim = [usize::from(config.height) + 2, usize::from(config.width) + 2];
        let mut cells = Array2::from_elem(padded_dim, Cell::Border);

        for (row, line) in rows.iter().enumerate() {
            let mut markers = line.as_ref().chars();
            for col in 0..usize::from(config.width) {
                cells[[row + 1, col + 1]] = match markers.next() {
                    Some(MINE_MARKER) => Cell::Mine,
                    Some(EMPTY_MARKER) => Cell::Empty(0),
                    _ => return Err(GridError::InvalidInput),
                };
            }
        }

        let mut grid = Self { cells, config };
        grid.annotate();

        log::debug!(
            "built {}x{} grid, {} mines",
            config.width,
            config.height,
            grid.mine_count()
        );
        Ok(grid)
    }

    /// Replaces every interior empty cell with its neighbor-mine count.
    ///
    /// Counts depend only on mine positions, which this pass never touches, so
    /// visitation order does not matter.
    fn annotate(&mut self) {
        for row in 1..=self.config.height {
            for col in 1..=self.config.width {
                let coords = (row, col);
                if self.cells[coords.to_nd_index()].is_mine() {
                    continue;
                }

                let count = self
                    .iter_neighbors(coords)
                    .filter(|&pos| self.cells[pos.to_nd_index()].is_mine())
                    .count()
                    .try_into()
                    .unwrap();
                self.cells[coords.to_nd_index()] = Cell::Empty(count);
            }
        }
    }

    /// Checks that `coords` addresses an interior cell and translates it to
    /// padded-grid coordinates.
    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.config.height && col < self.config.width {
            Ok((row + 1, col + 1))
        } else {
            Err(GridError::OutOfRange)
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    /// State of the interior cell at unpadded `coords`.
    ///
    /// Panics if `coords` is outside the playable grid; use
    /// [`validate_coords`](Self::validate_coords) first for untrusted input.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        let (row, col) = coords;
        self.cells[(row + 1, col + 1).to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(rows: &[&str]) -> Grid {
        let width = rows[0].len().try_into().unwrap();
        let height = rows.len().try_into().unwrap();
        Grid::build(rows, GridConfig::new(width, height)).unwrap()
    }

    #[test]
    fn mine_cells_survive_annotation_unchanged() {
        let grid = grid(&["X.", ".X"]);

        assert_eq!(grid.cell_at((0, 0)), Cell::Mine);
        assert_eq!(grid.cell_at((1, 1)), Cell::Mine);
        assert_eq!(grid.mine_count(), 2);
    }

    #[test]
    fn counts_match_brute_force_recomputation() {
        let rows = ["X..X.", ".....", "..X..", "X...X"];
        let grid = grid(&rows);

        let mine_at = |row: i16, col: i16| -> bool {
            if !(0..4).contains(&row) || !(0..5).contains(&col) {
                return false;
            }
            rows[row as usize].as_bytes()[col as usize] == b'X'
        };

        for row in 0..4i16 {
            for col in 0..5i16 {
                if mine_at(row, col) {
                    continue;
                }
                let mut expected = 0;
                for d_row in -1..=1 {
                    for d_col in -1..=1 {
                        if (d_row, d_col) != (0, 0) && mine_at(row + d_row, col + d_col) {
                            expected += 1;
                        }
                    }
                }
                assert_eq!(
                    grid.cell_at((row as Coord, col as Coord)),
                    Cell::Empty(expected),
                    "mismatch at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn single_center_mine_gives_count_one_everywhere() {
        let grid = grid(&["...", ".X.", "..."]);

        for coords in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(grid.cell_at(coords), Cell::Empty(1));
        }
    }

    #[test]
    fn border_ring_surrounds_the_interior() {
        let grid = grid(&["..", ".."]);

        for row in 0..4usize {
            for col in 0..4usize {
                let on_ring = row == 0 || row == 3 || col == 0 || col == 3;
                assert_eq!(grid.cells[[row, col]] == Cell::Border, on_ring);
            }
        }
    }

    #[test]
    fn wrong_row_count_is_rejected() {
        let config = GridConfig::new(2, 3);

        assert_eq!(
            Grid::build(&["..", ".."], config),
            Err(GridError::InvalidInput)
        );
    }

    #[test]
    fn short_row_is_rejected() {
        let config = GridConfig::new(3, 2);

        assert_eq!(
            Grid::build(&["...", ".."], config),
            Err(GridError::InvalidInput)
        );
    }

    #[test]
    fn unknown_marker_is_rejected() {
        let config = GridConfig::new(2, 1);

        assert_eq!(Grid::build(&[".?"], config), Err(GridError::InvalidInput));
    }

    #[test]
    fn oversized_axis_is_rejected() {
        assert_eq!(
            Grid::build(&["."], GridConfig::new(Coord::MAX, 1)),
            Err(GridError::InvalidInput)
        );
    }

    #[test]
    fn zero_sized_config_is_rejected() {
        let rows: Vec<&str> = Vec::new();

        assert_eq!(
            Grid::build(&rows, GridConfig::new(0, 0)),
            Err(GridError::InvalidInput)
        );
    }

    #[test]
    fn trailing_characters_past_width_are_ignored() {
        let grid = Grid::build(&["..X trailing"], GridConfig::new(3, 1)).unwrap();

        assert_eq!(grid.cell_at((0, 2)), Cell::Mine);
        assert_eq!(grid.cell_at((0, 1)), Cell::Empty(1));
    }
}
