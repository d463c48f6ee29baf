use serde::{Deserialize, Serialize};

use crate::{BoardConfig, CellCount, Coord2};

/// Grid used by every preset; difficulty only changes the mine count.
pub const GRID_SIZE: Coord2 = (15, 15);

/// Preset difficulty levels selectable at the start of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn size(self) -> Coord2 {
        GRID_SIZE
    }

    pub const fn mine_count(self) -> CellCount {
        match self {
            Self::Easy => 20,
            Self::Medium => 40,
            Self::Hard => 60,
        }
    }

    pub const fn config(self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_form_valid_configs() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            assert_eq!(BoardConfig::new(config.size, config.mines), Ok(config));
        }
    }

    #[test]
    fn mine_counts_grow_with_difficulty() {
        assert!(Difficulty::Easy.mine_count() < Difficulty::Medium.mine_count());
        assert!(Difficulty::Medium.mine_count() < Difficulty::Hard.mine_count());
    }
}
