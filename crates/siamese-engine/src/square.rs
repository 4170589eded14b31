//! The finished, immutable magic square.

use crate::step::StepRule;
use siamese_core::{Coord, Order, SquareError};
use siamese_grid::Grid;

/// A completely filled grid produced by a [`Generator`](crate::Generator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicSquare {
    grid: Grid,
    rule: StepRule,
}

impl MagicSquare {
    pub(crate) fn new(grid: Grid, rule: StepRule) -> Self {
        Self { grid, rule }
    }

    /// Side length.
    pub fn order(&self) -> Order {
        self.grid.order()
    }

    /// The step rule that produced this square.
    pub fn rule(&self) -> StepRule {
        self.rule
    }

    /// The common line sum `n(n²+1)/2`.
    pub fn magic_constant(&self) -> u64 {
        self.grid.order().magic_constant()
    }

    /// Value at `coord`.
    pub fn get(&self, coord: Coord) -> Result<u32, SquareError> {
        self.grid.get(coord)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        self.grid.cells()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.grid.rows()
    }

    /// Copy the square into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
