//! The validated side length of an odd-order magic square.

use crate::error::SquareError;
use std::fmt;

/// Side length `n` of a magic square.
///
/// Always odd and in `1..=Order::MAX`; the Siamese stepping rules only
/// produce a magic square for odd orders, so even and non-positive sizes
/// are rejected here rather than yielding a broken grid later.
///
/// # Examples
///
/// ```
/// use siamese_core::Order;
///
/// let order = Order::new(3).unwrap();
/// assert_eq!(order.cell_count(), 9);
/// assert_eq!(order.magic_constant(), 15);
/// assert!(Order::new(4).is_err());
/// assert!(Order::try_from(-1i64).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Order(usize);

impl Order {
    /// Largest accepted order: `n²` must fit the `u32` cell type.
    pub const MAX: usize = 65_535;

    /// Validate `n` as a square order.
    pub fn new(n: usize) -> Result<Self, SquareError> {
        let size = n as i128;
        if n == 0 {
            return Err(SquareError::InvalidSize {
                size,
                reason: "order must be at least 1",
            });
        }
        if n % 2 == 0 {
            return Err(SquareError::InvalidSize {
                size,
                reason: "order must be odd",
            });
        }
        if n > Self::MAX {
            return Err(SquareError::InvalidSize {
                size,
                reason: "order exceeds 65535",
            });
        }
        Ok(Self(n))
    }

    /// The side length `n`.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells, `n²`.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Largest value placed in the square, `n²`.
    pub fn max_value(self) -> u32 {
        // n <= 65535, so n² < u32::MAX.
        self.cell_count() as u32
    }

    /// Index of the last row and column, `n - 1`.
    pub fn last(self) -> usize {
        self.0 - 1
    }

    /// Index of the middle row and column, `n / 2`.
    pub fn middle(self) -> usize {
        self.0 / 2
    }

    /// The common line sum `n(n²+1)/2`.
    pub fn magic_constant(self) -> u64 {
        let n = self.0 as u64;
        n * (n * n + 1) / 2
    }
}

impl TryFrom<i64> for Order {
    type Error = SquareError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        let n = usize::try_from(size).map_err(|_| SquareError::InvalidSize {
            size: i128::from(size),
            reason: "order must be positive",
        })?;
        Self::new(n)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_odd_orders() {
        for n in [1usize, 3, 5, 7, 9, Order::MAX] {
            assert_eq!(Order::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn rejects_even_and_zero() {
        for n in [0usize, 2, 4, 10] {
            assert!(matches!(
                Order::new(n),
                Err(SquareError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn rejects_negative() {
        let err = Order::try_from(-1i64).unwrap_err();
        assert_eq!(
            err,
            SquareError::InvalidSize {
                size: -1,
                reason: "order must be positive",
            }
        );
    }

    #[test]
    fn rejects_too_large() {
        assert!(Order::new(Order::MAX + 2).is_err());
    }

    #[test]
    fn huge_size_is_reported_unchanged() {
        let err = Order::new(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SquareError::InvalidSize {
                size: usize::MAX as i128,
                reason: "order exceeds 65535",
            }
        );
    }

    #[test]
    fn derived_quantities() {
        let o = Order::new(5).unwrap();
        assert_eq!(o.cell_count(), 25);
        assert_eq!(o.max_value(), 25);
        assert_eq!(o.last(), 4);
        assert_eq!(o.middle(), 2);
        assert_eq!(o.magic_constant(), 65);
        assert_eq!(Order::new(1).unwrap().magic_constant(), 1);
    }

    #[test]
    fn max_order_values_fit_u32() {
        let o = Order::new(Order::MAX).unwrap();
        assert_eq!(o.max_value() as usize, o.cell_count());
    }
}
