//! The lines of a square that must share the magic constant.

use std::fmt;

/// One summed line of a square grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// The row with the given index.
    Row(usize),
    /// The column with the given index.
    Col(usize),
    /// Main diagonal, top-left to bottom-right.
    Diagonal,
    /// Anti-diagonal, top-right to bottom-left.
    AntiDiagonal,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(r) => write!(f, "row {r}"),
            Self::Col(c) => write!(f, "column {c}"),
            Self::Diagonal => write!(f, "main diagonal"),
            Self::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}
