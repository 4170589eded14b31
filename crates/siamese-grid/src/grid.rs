//! Owned row-major storage for an `n x n` grid of cell values.

use siamese_core::{Coord, Order, SquareError};
use tracing::debug;

/// An `n x n` grid of `u32` cells, where `0` marks an empty cell.
///
/// Cells live in a single contiguous buffer; the cell at `(row, col)` is
/// at offset `row * n + col`. Every accessor checks bounds and returns
/// [`SquareError::CoordOutOfBounds`] instead of panicking. The buffer is
/// released when the grid is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    order: Order,
    cells: Vec<u32>,
}

impl Grid {
    /// Value of an unfilled cell.
    pub const EMPTY: u32 = 0;

    /// Allocate an `n x n` grid with every cell set to [`Grid::EMPTY`].
    ///
    /// Returns `Err(SquareError::AllocationFailed)` if the buffer cannot be
    /// reserved; no partially built grid is exposed.
    pub fn new(order: Order) -> Result<Self, SquareError> {
        let count = order.cell_count();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| SquareError::AllocationFailed { cells: count })?;
        cells.resize(count, Self::EMPTY);
        debug!(order = order.get(), cells = count, "allocated grid");
        Ok(Self { order, cells })
    }

    /// Side length of the grid.
    pub fn order(&self) -> Order {
        self.order
    }

    fn index(&self, coord: Coord) -> Result<usize, SquareError> {
        let n = self.order.get();
        if coord.row >= n || coord.col >= n {
            return Err(SquareError::CoordOutOfBounds { coord, order: n });
        }
        Ok(coord.row * n + coord.col)
    }

    /// Value stored at `coord`.
    pub fn get(&self, coord: Coord) -> Result<u32, SquareError> {
        let i = self.index(coord)?;
        Ok(self.cells[i])
    }

    /// Whether the cell at `coord` is still empty.
    pub fn is_vacant(&self, coord: Coord) -> Result<bool, SquareError> {
        Ok(self.get(coord)? == Self::EMPTY)
    }

    /// Store `value` at `coord`.
    ///
    /// Values must lie in `0..=n²`.
    pub fn set(&mut self, coord: Coord, value: u32) -> Result<(), SquareError> {
        let max = self.order.max_value();
        if value > max {
            return Err(SquareError::ValueOutOfRange { value, max });
        }
        let i = self.index(coord)?;
        self.cells[i] = value;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.order.get())
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&v| v != Self::EMPTY).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Grid {
        Grid::new(Order::new(n).unwrap()).unwrap()
    }

    #[test]
    fn new_grid_is_all_empty() {
        let g = grid(5);
        assert_eq!(g.cells().len(), 25);
        assert!(g.cells().iter().all(|&v| v == Grid::EMPTY));
        assert_eq!(g.filled(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut g = grid(3);
        g.set(Coord::new(2, 1), 1).unwrap();
        assert_eq!(g.get(Coord::new(2, 1)).unwrap(), 1);
        assert!(!g.is_vacant(Coord::new(2, 1)).unwrap());
        assert!(g.is_vacant(Coord::new(0, 0)).unwrap());
        assert_eq!(g.filled(), 1);
    }

    #[test]
    fn storage_is_row_major() {
        let mut g = grid(3);
        g.set(Coord::new(1, 2), 7).unwrap();
        assert_eq!(g.cells()[5], 7);
        let rows: Vec<&[u32]> = g.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[0, 0, 7]);
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut g = grid(3);
        let oob = Coord::new(3, 0);
        assert_eq!(
            g.get(oob),
            Err(SquareError::CoordOutOfBounds { coord: oob, order: 3 })
        );
        assert!(g.set(Coord::new(0, 3), 1).is_err());
    }

    #[test]
    fn value_above_n_squared_is_rejected() {
        let mut g = grid(3);
        assert_eq!(
            g.set(Coord::new(0, 0), 10),
            Err(SquareError::ValueOutOfRange { value: 10, max: 9 })
        );
        assert!(g.set(Coord::new(0, 0), 9).is_ok());
    }

    #[test]
    fn fresh_grids_are_independent() {
        let mut a = grid(3);
        a.set(Coord::new(0, 0), 4).unwrap();
        let b = grid(3);
        assert_eq!(b.filled(), 0);
    }
}
