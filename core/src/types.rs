/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for total-cell and revealed-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the 8 cells surrounding `center` in padded-grid coordinates.
///
/// The caller must pass an interior coordinate; the border ring guarantees every
/// displaced coordinate stays inside the padded array, so no bounds filtering
/// happens here.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: Coord2) -> Self {
        Self { center, index: 0 }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let &(d_row, d_col) = DISPLACEMENTS.get(usize::from(self.index))?;
        self.index += 1;

        let (row, col) = self.center;
        // center is interior, so the displacement cannot leave the padded array
        Some((row.wrapping_add_signed(d_row), col.wrapping_add_signed(d_col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbor_iter_yields_all_eight_surrounding_cells() {
        let neighbors: Vec<Coord2> = NeighborIter::new((2, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(2, 3)));
        for (row, col) in neighbors {
            assert!((1..=3).contains(&row));
            assert!((2..=4).contains(&col));
        }
    }

    #[test]
    fn mult_saturates_instead_of_overflowing() {
        assert_eq!(mult(3, 4), 12);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
