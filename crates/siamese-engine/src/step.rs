//! Coordinate stepping rules.

use siamese_core::{Coord, Order, SquareError};
use siamese_grid::{wrap, Grid};
use std::fmt;
use tracing::trace;

/// Which variant of the Siamese stepping procedure to follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepRule {
    /// Start at `(n-1, n/2)`. Step `(+1, +1)`; on collision step `(-1, 0)`
    /// from the previous cell instead.
    #[default]
    Inverted,
    /// Start at `(0, n/2)`. Step `(-1, +1)`; on collision step `(+1, 0)`
    /// from the previous cell instead.
    Classic,
}

impl StepRule {
    /// Cell that receives the value `1`.
    pub fn start(self, order: Order) -> Coord {
        match self {
            Self::Inverted => Coord::new(order.last(), order.middle()),
            Self::Classic => Coord::new(0, order.middle()),
        }
    }

    /// Default `(row, col)` move from the previous cell.
    fn advance(self) -> (isize, isize) {
        match self {
            Self::Inverted => (1, 1),
            Self::Classic => (-1, 1),
        }
    }

    /// Move from the previous cell when the default move is blocked.
    fn fallback(self) -> (isize, isize) {
        match self {
            Self::Inverted => (-1, 0),
            Self::Classic => (1, 0),
        }
    }
}

impl fmt::Display for StepRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted => write!(f, "inverted"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

/// Compute the coordinate for the value following the one at `last`.
///
/// Takes the rule's default move with wraparound; if that cell is already
/// filled, takes the fallback move from `last` instead. The fallback cell
/// must be empty, otherwise [`SquareError::FallbackOccupied`] is returned.
pub fn next_coordinate(grid: &Grid, last: Coord, rule: StepRule) -> Result<Coord, SquareError> {
    let order = grid.order();
    let (dr, dc) = rule.advance();
    let candidate = wrap::offset(last, dr, dc, order);
    if grid.is_vacant(candidate)? {
        return Ok(candidate);
    }

    let (dr, dc) = rule.fallback();
    let fallback = wrap::offset(last, dr, dc, order);
    trace!(%candidate, %fallback, "candidate occupied, taking fallback");
    let value = grid.get(fallback)?;
    if value != Grid::EMPTY {
        return Err(SquareError::FallbackOccupied {
            coord: fallback,
            value,
        });
    }
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Grid {
        Grid::new(Order::new(n).unwrap()).unwrap()
    }

    #[test]
    fn inverted_starts_bottom_middle() {
        let order = Order::new(3).unwrap();
        assert_eq!(StepRule::Inverted.start(order), Coord::new(2, 1));
        assert_eq!(StepRule::Classic.start(order), Coord::new(0, 1));
    }

    #[test]
    fn inverted_wraps_row_to_zero() {
        let mut g = grid(3);
        g.set(Coord::new(2, 1), 1).unwrap();
        let next = next_coordinate(&g, Coord::new(2, 1), StepRule::Inverted).unwrap();
        assert_eq!(next, Coord::new(0, 2));
    }

    #[test]
    fn inverted_wraps_col_to_zero() {
        let mut g = grid(3);
        g.set(Coord::new(2, 1), 1).unwrap();
        g.set(Coord::new(0, 2), 2).unwrap();
        let next = next_coordinate(&g, Coord::new(0, 2), StepRule::Inverted).unwrap();
        assert_eq!(next, Coord::new(1, 0));
    }

    #[test]
    fn inverted_collision_steps_up_one_row() {
        let mut g = grid(3);
        g.set(Coord::new(2, 1), 1).unwrap();
        g.set(Coord::new(0, 2), 2).unwrap();
        g.set(Coord::new(1, 0), 3).unwrap();
        // (1,0) -> (2,1) is taken by 1.
        let next = next_coordinate(&g, Coord::new(1, 0), StepRule::Inverted).unwrap();
        assert_eq!(next, Coord::new(0, 0));
    }

    #[test]
    fn inverted_collision_fallback_wraps_to_last_row() {
        let mut g = grid(3);
        g.set(Coord::new(0, 0), 4).unwrap();
        g.set(Coord::new(1, 1), 5).unwrap();
        let next = next_coordinate(&g, Coord::new(0, 0), StepRule::Inverted).unwrap();
        assert_eq!(next, Coord::new(2, 0));
    }

    #[test]
    fn classic_collision_steps_down() {
        let mut g = grid(3);
        g.set(Coord::new(0, 1), 1).unwrap();
        g.set(Coord::new(2, 2), 2).unwrap();
        g.set(Coord::new(1, 0), 3).unwrap();
        let next = next_coordinate(&g, Coord::new(1, 0), StepRule::Classic).unwrap();
        assert_eq!(next, Coord::new(2, 0));
    }

    #[test]
    fn occupied_fallback_is_an_error() {
        let mut g = grid(3);
        g.set(Coord::new(1, 1), 5).unwrap();
        g.set(Coord::new(0, 1), 6).unwrap();
        // (1,1) is the cursor; default (2,2) would be free, so block it too.
        g.set(Coord::new(2, 2), 7).unwrap();
        let err = next_coordinate(&g, Coord::new(1, 1), StepRule::Inverted).unwrap_err();
        assert_eq!(
            err,
            SquareError::FallbackOccupied {
                coord: Coord::new(0, 1),
                value: 6,
            }
        );
    }
}
