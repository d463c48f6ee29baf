use ndarray::Array2;
use rand::prelude::*;
use rand::seq::index;

use super::MineGenerator;
use crate::{BoardConfig, MineLayout, ToNdIndex};

/// Uniform placement: every cell is equally likely to end up mined, no cell
/// is picked twice, and the result is a pure function of (size, mines, seed).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds from the thread-local entropy source, so consecutive boards
    /// never share placement state.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());

        let total = usize::from(config.total_cells());
        let requested = usize::from(config.mines);
        if requested > total {
            // only reachable through an unchecked config
            log::warn!("mine count {requested} exceeds cell count {total}, clamping");
        }

        let cells = mines
            .as_slice_mut()
            .expect("freshly allocated grid is contiguous");
        for picked in index::sample(&mut rng, total, requested.min(total)) {
            cells[picked] = true;
        }

        log::debug!(
            "placed {} mines on a {:?} grid (seed {})",
            requested.min(total),
            config.size,
            self.seed
        );
        MineLayout::from_mine_mask(mines)
    }
}
