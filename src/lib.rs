use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod difficulty;
mod error;
mod generator;
mod tile;
mod types;

/// Board dimensions plus mine total.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects configurations that cannot produce a playable board: zero-area
    /// grids, zero mines, or mines filling every cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if mines == 0 || mines >= mult(size.0, size.1) {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Mine placement fixed at board construction, together with the adjacency
/// table derived from it.
///
/// Both grids are immutable once built; the adjacency count stored under a
/// mine cell is never read by game logic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: Array2<bool>,
    adjacent: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();

        let mut adjacent: Array2<u8> = Array2::default(mines.raw_dim());
        for ((row, col), _) in mines.indexed_iter().filter(|&(_, &is_mine)| is_mine) {
            let pos = (row.try_into().unwrap(), col.try_into().unwrap());
            for neighbor in mines.iter_neighbors(pos) {
                adjacent[neighbor.to_nd_index()] += 1;
            }
        }

        Self {
            mines,
            adjacent,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.to_nd_index());

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::InvalidPosition);
            }
            mines[pos.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mines))
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn validate_pos(&self, pos: Coord2) -> Result<Coord2> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Coord2) -> bool {
        self.mines[pos.to_nd_index()]
    }

    pub fn adjacent_mines(&self, pos: Coord2) -> u8 {
        self.adjacent[pos.to_nd_index()]
    }

    pub(crate) fn iter_neighbors(&self, pos: Coord2) -> NeighborIter {
        self.mines.iter_neighbors(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_and_saturating_mine_counts() {
        assert_eq!(BoardConfig::new((3, 3), 0), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((3, 3), 9), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((3, 3), 12), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((0, 5), 1), Err(GameError::InvalidConfig));
        assert!(BoardConfig::new((3, 3), 8).is_ok());
    }

    #[test]
    fn layout_rejects_out_of_bounds_mine_coords() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 3)]),
            Err(GameError::InvalidPosition)
        );
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(0, 0), (1, 5)]),
            Err(GameError::InvalidPosition)
        );
    }

    #[test]
    fn layout_counts_mines_and_safe_cells() {
        let layout = MineLayout::from_mine_coords((4, 4), &[(0, 0), (3, 3)]).unwrap();

        assert_eq!(layout.size(), (4, 4));
        assert_eq!(layout.total_cells(), 16);
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 14);
        assert!(layout.contains_mine((0, 0)));
        assert!(!layout.contains_mine((1, 1)));
    }

    #[test]
    fn adjacency_counts_match_a_brute_force_recount() {
        let layout = RandomMineGenerator::new(42).generate(Difficulty::Hard.config());
        let (rows, cols) = layout.size();

        for row in 0..rows {
            for col in 0..cols {
                if layout.contains_mine((row, col)) {
                    continue;
                }

                let mut expected = 0;
                for dr in -1i16..=1 {
                    for dc in -1i16..=1 {
                        if (dr, dc) == (0, 0) {
                            continue;
                        }
                        let (nr, nc) = (i16::from(row) + dr, i16::from(col) + dc);
                        if (0..i16::from(rows)).contains(&nr)
                            && (0..i16::from(cols)).contains(&nc)
                            && layout.contains_mine((nr as Coord, nc as Coord))
                        {
                            expected += 1;
                        }
                    }
                }

                assert_eq!(layout.adjacent_mines((row, col)), expected);
            }
        }
    }
}
