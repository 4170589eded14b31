//! Periodic (wraparound) stepping on a square grid.
//!
//! Stepping off one edge lands on the opposite edge: one step past the
//! last row lands on row 0, one step before row 0 lands on row `n - 1`.
//! Rows and columns wrap independently.

use siamese_core::{Coord, Order};

/// Resolve `val` onto an axis of length `len` with periodic wrap.
///
/// `len` must be non-zero; public callers go through [`offset`], whose
/// [`Order`] is always at least 1.
pub(crate) fn resolve_axis(val: isize, len: usize) -> usize {
    let n = len as isize;
    (((val % n) + n) % n) as usize
}

/// Move `coord` by `(dr, dc)`, wrapping each axis independently.
///
/// ```
/// use siamese_core::{Coord, Order};
/// use siamese_grid::wrap::offset;
///
/// let order = Order::new(3).unwrap();
/// assert_eq!(offset(Coord::new(2, 1), 1, 1, order), Coord::new(0, 2));
/// assert_eq!(offset(Coord::new(0, 0), -1, 0, order), Coord::new(2, 0));
/// ```
pub fn offset(coord: Coord, dr: isize, dc: isize, order: Order) -> Coord {
    let n = order.get();
    Coord::new(
        resolve_axis(coord.row as isize + dr, n),
        resolve_axis(coord.col as isize + dc, n),
    )
}
