//! Checking the magic property of a finished square.

use crate::square::MagicSquare;
use siamese_core::{Line, SquareError};
use siamese_grid::Grid;

/// Sums of every line of a square grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSums {
    /// Row sums, top to bottom.
    pub rows: Vec<u64>,
    /// Column sums, left to right.
    pub cols: Vec<u64>,
    /// Main diagonal sum.
    pub diagonal: u64,
    /// Anti-diagonal sum.
    pub anti_diagonal: u64,
}

impl LineSums {
    /// Sum every line of `grid`.
    pub fn of(grid: &Grid) -> Self {
        let n = grid.order().get();
        let mut rows = vec![0u64; n];
        let mut cols = vec![0u64; n];
        let mut diagonal = 0u64;
        let mut anti_diagonal = 0u64;
        for (r, row) in grid.rows().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                let v = u64::from(v);
                rows[r] += v;
                cols[c] += v;
                if r == c {
                    diagonal += v;
                }
                if r + c == n - 1 {
                    anti_diagonal += v;
                }
            }
        }
        Self {
            rows,
            cols,
            diagonal,
            anti_diagonal,
        }
    }

    /// Every line paired with its sum: rows, then columns, then diagonals.
    pub fn iter(&self) -> impl Iterator<Item = (Line, u64)> + '_ {
        let rows = self.rows.iter().enumerate().map(|(i, &s)| (Line::Row(i), s));
        let cols = self.cols.iter().enumerate().map(|(i, &s)| (Line::Col(i), s));
        rows.chain(cols).chain([
            (Line::Diagonal, self.diagonal),
            (Line::AntiDiagonal, self.anti_diagonal),
        ])
    }
}

/// Check that `grid` holds each of `1..=n²` exactly once.
fn check_permutation(grid: &Grid) -> Result<(), SquareError> {
    let max = grid.order().max_value();
    let mut seen = vec![false; grid.cells().len() + 1];
    for &v in grid.cells() {
        if v == Grid::EMPTY || v > max || seen[v as usize] {
            return Err(SquareError::NotPermutation { value: v });
        }
        seen[v as usize] = true;
    }
    Ok(())
}

impl MagicSquare {
    /// Sums of every row, column, and diagonal.
    pub fn line_sums(&self) -> LineSums {
        LineSums::of(self.grid())
    }

    /// Check that the cells are a permutation of `1..=n²` and that every
    /// line sums to the magic constant.
    pub fn verify(&self) -> Result<(), SquareError> {
        check_permutation(self.grid())?;
        let expected = self.magic_constant();
        if let Some((line, sum)) = self.line_sums().iter().find(|&(_, s)| s != expected) {
            return Err(SquareError::NotMagic {
                line,
                sum,
                expected,
            });
        }
        Ok(())
    }
}
