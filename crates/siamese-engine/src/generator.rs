//! The stateful placement loop.
//!
//! A [`Generator`] moves strictly forward through its [`Phase`]s:
//!
//! ```text
//! Empty --place_first--> FirstPlaced --step--> Filling(k) --step--> Complete
//! ```
//!
//! Each call to [`Generator::step`] places exactly one value. Calling an
//! operation from the wrong phase returns [`SquareError::OutOfPhase`].

use crate::config::GeneratorConfig;
use crate::square::MagicSquare;
use crate::step::next_coordinate;
use siamese_core::{Coord, Order, SquareError};
use siamese_grid::Grid;
use tracing::{debug, trace};

/// Lifecycle phase of a [`Generator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Grid allocated and zeroed; nothing placed.
    Empty,
    /// `1` has been placed at the start cell.
    FirstPlaced,
    /// Values `1..=k` have been placed, with `1 < k < n²`.
    Filling(u32),
    /// All `n²` values have been placed.
    Complete,
}

impl Phase {
    /// Short lowercase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::FirstPlaced => "first-placed",
            Self::Filling(_) => "filling",
            Self::Complete => "complete",
        }
    }
}

/// One value written to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The value placed.
    pub value: u32,
    /// Where it was placed.
    pub coord: Coord,
}

/// Builds one magic square by threading a cursor through the grid.
///
/// The generator exclusively owns its grid. Generating another square
/// means constructing a fresh generator; nothing is shared between runs.
///
/// # Examples
///
/// ```
/// use siamese_core::{Coord, Order};
/// use siamese_engine::{Generator, GeneratorConfig, Phase};
///
/// let mut generator = Generator::new(Order::new(3).unwrap(), GeneratorConfig::default()).unwrap();
/// assert_eq!(generator.place_first().unwrap(), Coord::new(2, 1));
/// generator.fill().unwrap();
/// assert_eq!(generator.phase(), Phase::Complete);
///
/// let square = generator.finish().unwrap();
/// assert_eq!(square.to_rows(), vec![vec![4, 9, 2], vec![3, 5, 7], vec![8, 1, 6]]);
/// ```
#[derive(Debug)]
pub struct Generator {
    grid: Grid,
    config: GeneratorConfig,
    cursor: Option<Coord>,
    phase: Phase,
}

impl Generator {
    /// Allocate a zeroed grid of the given order.
    pub fn new(order: Order, config: GeneratorConfig) -> Result<Self, SquareError> {
        let grid = Grid::new(order)?;
        debug!(order = order.get(), rule = %config.rule, "generator ready");
        Ok(Self {
            grid,
            config,
            cursor: None,
            phase: Phase::Empty,
        })
    }

    /// Allocate, place every value, and finish in one call.
    pub fn run(order: Order, config: GeneratorConfig) -> Result<MagicSquare, SquareError> {
        let mut generator = Self::new(order, config)?;
        generator.place_first()?;
        generator.fill()?;
        generator.finish()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Coordinate of the most recent placement, if any.
    pub fn cursor(&self) -> Option<Coord> {
        self.cursor
    }

    /// The grid as filled so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Place `1` at the rule's start cell and return that cell.
    pub fn place_first(&mut self) -> Result<Coord, SquareError> {
        if self.phase != Phase::Empty {
            return Err(SquareError::OutOfPhase {
                expected: Phase::Empty.name(),
                actual: self.phase.name(),
            });
        }
        let start = self.config.rule.start(self.grid.order());
        self.grid.set(start, 1)?;
        self.cursor = Some(start);
        self.phase = Phase::FirstPlaced;
        debug!(row = start.row, col = start.col, "placed first value");
        Ok(start)
    }

    /// Place the next value.
    ///
    /// Returns `Ok(None)` once every value has been placed, moving the
    /// generator to [`Phase::Complete`].
    pub fn step(&mut self) -> Result<Option<Placement>, SquareError> {
        let last_value = match self.phase {
            Phase::FirstPlaced => 1,
            Phase::Filling(k) => k,
            Phase::Complete => return Ok(None),
            Phase::Empty => {
                return Err(SquareError::OutOfPhase {
                    expected: "first-placed or filling",
                    actual: self.phase.name(),
                })
            }
        };
        let total = self.grid.order().max_value();
        if last_value == total {
            self.phase = Phase::Complete;
            return Ok(None);
        }
        let last = self.cursor.ok_or(SquareError::OutOfPhase {
            expected: "first-placed or filling",
            actual: Phase::Empty.name(),
        })?;

        let value = last_value + 1;
        let coord = next_coordinate(&self.grid, last, self.config.rule)?;
        self.grid.set(coord, value)?;
        self.cursor = Some(coord);
        self.phase = if value == total {
            Phase::Complete
        } else {
            Phase::Filling(value)
        };
        trace!(value, row = coord.row, col = coord.col, "placed");
        Ok(Some(Placement { value, coord }))
    }

    /// Place every remaining value.
    pub fn fill(&mut self) -> Result<(), SquareError> {
        while self.step()?.is_some() {}
        debug!(
            order = self.grid.order().get(),
            placed = self.grid.filled(),
            "grid complete"
        );
        Ok(())
    }

    /// Consume a complete generator and return the finished square.
    ///
    /// Runs [`MagicSquare::verify`] first when the configuration asks for it.
    pub fn finish(self) -> Result<MagicSquare, SquareError> {
        if self.phase != Phase::Complete {
            return Err(SquareError::OutOfPhase {
                expected: Phase::Complete.name(),
                actual: self.phase.name(),
            });
        }
        let square = MagicSquare::new(self.grid, self.config.rule);
        if self.config.verify {
            square.verify()?;
            debug!(order = square.order().get(), "verified magic square");
        }
        Ok(square)
    }
}
