use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{
    CellCount, Coord2, Difficulty, MineGenerator, MineLayout, RandomMineGenerator, Result,
    RevealedTile, TileState, ToNdIndex,
};

/// Lifecycle state of a board.
///
/// The only transitions are `InProgress -> Won` and `InProgress -> Lost`; a
/// finished board never leaves its terminal state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game of minesweeper, from construction to win or loss.
///
/// The board owns all game state. A frontend calls [`Board::reveal`], renders
/// the returned change-set, and queries [`Board::is_won`]/[`Board::is_lost`]
/// after each call; starting over means constructing a new board, never
/// resetting this one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: MineLayout,
    grid: Array2<TileState>,
    revealed_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Fresh board for a preset difficulty, mines sampled from entropy.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_layout(RandomMineGenerator::from_entropy().generate(difficulty.config()))
    }

    /// Fresh board over an explicit mine placement.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        Self {
            layout,
            grid: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == GameState::Won
    }

    pub fn is_lost(&self) -> bool {
        self.state == GameState::Lost
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn tile_at(&self, pos: Coord2) -> TileState {
        self.grid[pos.to_nd_index()]
    }

    pub fn is_visible(&self, pos: Coord2) -> bool {
        self.tile_at(pos).is_revealed()
    }

    /// Snapshot of the whole visibility matrix, indexed like the grid.
    pub fn visibility(&self) -> Array2<bool> {
        self.grid.map(|tile| tile.is_revealed())
    }

    pub fn has_mine_at(&self, pos: Coord2) -> bool {
        self.layout.contains_mine(pos)
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveal the tile at `pos` and return every tile that became visible,
    /// flood-filling across the surrounding zero-adjacency region.
    ///
    /// Revealing an already-visible tile, or anything on a finished board, is
    /// a no-op returning an empty change-set. Out-of-bounds positions are
    /// rejected with [`GameError::InvalidPosition`].
    ///
    /// Hitting a mine reveals that tile alone and loses the game; the other
    /// mines stay hidden, a renderer can paint them via [`Board::has_mine_at`].
    ///
    /// [`GameError::InvalidPosition`]: crate::GameError::InvalidPosition
    pub fn reveal(&mut self, pos: Coord2) -> Result<Vec<RevealedTile>> {
        let pos = self.layout.validate_pos(pos)?;

        if self.state.is_finished() || self.grid[pos.to_nd_index()].is_revealed() {
            return Ok(Vec::new());
        }

        if self.layout.contains_mine(pos) {
            return Ok(vec![self.trigger_mine(pos)]);
        }

        let revealed = self.flood_reveal(pos);

        if self.revealed_count == self.layout.safe_cell_count() {
            self.state = GameState::Won;
            log::debug!("all {} safe tiles revealed, game won", self.revealed_count);
        }

        Ok(revealed)
    }

    fn trigger_mine(&mut self, pos: Coord2) -> RevealedTile {
        self.triggered_mine = Some(pos);
        self.state = GameState::Lost;
        log::debug!("mine hit at {pos:?}, game lost");
        self.reveal_tile(pos)
    }

    /// Breadth-first reveal starting at a safe tile. Traversal order is not
    /// part of the contract; the revealed set is order-independent.
    fn flood_reveal(&mut self, start: Coord2) -> Vec<RevealedTile> {
        let mut revealed = vec![self.reveal_tile(start)];

        if revealed[0].adjacent_mines == 0 {
            let mut visited = HashSet::from([start]);
            let mut to_visit: VecDeque<_> = self
                .layout
                .iter_neighbors(start)
                .filter(|&pos| !self.grid[pos.to_nd_index()].is_revealed())
                .collect();
            log::trace!("flood fill from {start:?}, initial frontier: {to_visit:?}");

            while let Some(visit_pos) = to_visit.pop_front() {
                if !visited.insert(visit_pos) {
                    continue;
                }
                if self.grid[visit_pos.to_nd_index()].is_revealed() {
                    continue;
                }

                let tile = self.reveal_tile(visit_pos);
                revealed.push(tile);

                if tile.adjacent_mines == 0 {
                    to_visit.extend(
                        self.layout
                            .iter_neighbors(visit_pos)
                            .filter(|&pos| !self.grid[pos.to_nd_index()].is_revealed())
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        revealed
    }

    fn reveal_tile(&mut self, pos: Coord2) -> RevealedTile {
        let adjacent_mines = self.layout.adjacent_mines(pos);
        self.grid[pos.to_nd_index()] = TileState::Revealed(adjacent_mines);
        self.revealed_count += 1;
        log::trace!("revealed {pos:?}, adjacent mines: {adjacent_mines}");
        RevealedTile { pos, adjacent_mines }
    }
}
