pub use random::*;

mod random;

use crate::{BoardConfig, MineLayout};

/// Strategy for burying mines into a fresh board.
pub trait MineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
