//! Bordered text rendering.
//!
//! Each row is printed as `|a|b|c|` between dashed divider lines. Cells are
//! right-aligned to the width of `n²` so columns line up for every order;
//! for single-digit squares this is exactly one character per cell.

use crate::square::MagicSquare;
use std::fmt;

impl fmt::Display for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.order().get();
        let width = self.order().max_value().to_string().len();
        let divider = "-".repeat(n * (width + 1) + 1);

        writeln!(f, "{divider}")?;
        for row in self.rows() {
            write!(f, "|")?;
            for v in row {
                write!(f, "{v:>width$}|")?;
            }
            writeln!(f)?;
            writeln!(f, "{divider}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Generator, GeneratorConfig, StepRule};
    use siamese_core::Order;

    #[test]
    fn renders_three_by_three() {
        let sq = Generator::run(Order::new(3).unwrap(), GeneratorConfig::default()).unwrap();
        let expected = "\
-------
|4|9|2|
-------
|3|5|7|
-------
|8|1|6|
-------
";
        assert_eq!(sq.to_string(), expected);
    }

    #[test]
    fn renders_single_cell() {
        let sq = Generator::run(Order::new(1).unwrap(), GeneratorConfig::default()).unwrap();
        assert_eq!(sq.to_string(), "---\n|1|\n---\n");
    }

    #[test]
    fn pads_multi_digit_cells() {
        let sq = Generator::run(
            Order::new(5).unwrap(),
            GeneratorConfig::new(StepRule::Classic),
        )
        .unwrap();
        let text = sq.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "----------------");
        assert_eq!(lines[1], "|17|24| 1| 8|15|");
        assert!(lines.iter().all(|l| l.len() == 16));
    }
}
