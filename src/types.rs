use ndarray::Array2;

/// Single board axis, used for row/column indices and grid dimensions.
pub type Coord = u8;

/// Count type wide enough for mine and cell totals.
pub type CellCount = u16;

/// Grid position as `(row, col)`, zero-based.
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

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(index, size)
    }
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

/// Applies `delta` to `pos`, returning a value only when it remains in bounds.
fn apply_delta((row, col): Coord2, (dr, dc): (i8, i8), (rows, cols): Coord2) -> Option<Coord2> {
    let next_row = row.checked_add_signed(dr)?;
    let next_col = col.checked_add_signed(dc)?;
    (next_row < rows && next_col < cols).then_some((next_row, next_col))
}

/// Iterator over the in-bounds Moore neighborhood of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(pos) = apply_delta(self.center, delta, self.bounds) {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edge_and_center_neighbor_counts() {
        let grid: Array2<u8> = Array2::default([3, 3]);

        assert_eq!(grid.iter_neighbors((0, 0)).count(), 3);
        assert_eq!(grid.iter_neighbors((0, 1)).count(), 5);
        assert_eq!(grid.iter_neighbors((1, 1)).count(), 8);
    }

    #[test]
    fn neighbors_stay_in_bounds_and_never_include_the_center() {
        let grid: Array2<u8> = Array2::default([2, 4]);

        for row in 0..2 {
            for col in 0..4 {
                for (r, c) in grid.iter_neighbors((row, col)) {
                    assert!(r < 2 && c < 4);
                    assert_ne!((r, c), (row, col));
                }
            }
        }
    }

    #[test]
    fn mult_covers_the_full_coord_range() {
        assert_eq!(mult(15, 15), 225);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
