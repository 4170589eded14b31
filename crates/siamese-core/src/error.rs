//! Error types for magic square generation.
//!
//! A single enum covers the whole pipeline: order validation, grid
//! storage, coordinate stepping, generator sequencing, and verification
//! of the finished square.

use crate::{Coord, Line};
use std::error::Error;
use std::fmt;

/// Errors arising while building, filling, or checking a magic square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquareError {
    /// Storage for the grid could not be obtained.
    AllocationFailed {
        /// Number of cells requested.
        cells: usize,
    },
    /// The requested order is not an odd integer in `1..=Order::MAX`.
    InvalidSize {
        /// The rejected size as given by the caller.
        size: i128,
        /// Which constraint the size violates.
        reason: &'static str,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        order: usize,
    },
    /// A value outside `0..=n²` was written to the grid.
    ValueOutOfRange {
        /// The rejected value.
        value: u32,
        /// Largest value the grid accepts.
        max: u32,
    },
    /// The collision fallback cell was itself already filled.
    FallbackOccupied {
        /// The fallback coordinate.
        coord: Coord,
        /// The value already stored there.
        value: u32,
    },
    /// A generator operation was called in the wrong phase.
    OutOfPhase {
        /// Phase(s) the operation requires.
        expected: &'static str,
        /// Phase the generator was in.
        actual: &'static str,
    },
    /// A row, column, or diagonal does not sum to the magic constant.
    NotMagic {
        /// The failing line.
        line: Line,
        /// Its actual sum.
        sum: u64,
        /// The magic constant `n(n²+1)/2`.
        expected: u64,
    },
    /// The cells are not a permutation of `1..=n²`.
    NotPermutation {
        /// First value found missing, duplicated, or out of range.
        value: u32,
    },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { cells } => {
                write!(f, "failed to allocate grid storage for {cells} cells")
            }
            Self::InvalidSize { size, reason } => {
                write!(f, "invalid square size {size}: {reason}")
            }
            Self::CoordOutOfBounds { coord, order } => {
                write!(f, "coordinate {coord} out of bounds for {order}x{order} grid")
            }
            Self::ValueOutOfRange { value, max } => {
                write!(f, "value {value} out of range [0, {max}]")
            }
            Self::FallbackOccupied { coord, value } => {
                write!(f, "fallback cell {coord} already holds {value}")
            }
            Self::OutOfPhase { expected, actual } => {
                write!(f, "generator is {actual}, expected {expected}")
            }
            Self::NotMagic {
                line,
                sum,
                expected,
            } => write!(f, "{line} sums to {sum}, expected {expected}"),
            Self::NotPermutation { value } => {
                write!(f, "value {value} breaks the 1..=n² permutation")
            }
        }
    }
}

impl Error for SquareError {}
