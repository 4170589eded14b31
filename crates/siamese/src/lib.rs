//! Siamese: odd-order magic squares by the De la Loubère method.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the workspace sub-crates. For most users, adding `siamese` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! let square = siamese::generate(3).unwrap();
//! assert_eq!(square.magic_constant(), 15);
//! assert!(square.verify().is_ok());
//! print!("{square}");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `siamese-core` | `Coord`, `Order`, `Line`, `SquareError` |
//! | [`grid`] | `siamese-grid` | Owned grid storage and wraparound stepping |
//! | [`engine`] | `siamese-engine` | Step rules, generator, verification, rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`siamese-core`).
pub use siamese_core as types;

/// Grid storage and wraparound helpers (`siamese-grid`).
pub use siamese_grid as grid;

/// Generator, step rules, verification, and rendering (`siamese-engine`).
pub use siamese_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use siamese::prelude::*;
/// ```
pub mod prelude {
    pub use siamese_core::{Coord, Line, Order, SquareError};
    pub use siamese_engine::{
        Generator, GeneratorConfig, LineSums, MagicSquare, Phase, Placement, StepRule,
    };
}

use siamese_core::{Order, SquareError};
use siamese_engine::{Generator, GeneratorConfig, MagicSquare};

/// Generate the magic square of order `n` with the default configuration.
///
/// Returns [`SquareError::InvalidSize`] if `n` is zero, even, or too large.
pub fn generate(n: usize) -> Result<MagicSquare, SquareError> {
    generate_with(n, GeneratorConfig::default())
}

/// Generate the magic square of order `n` with an explicit configuration.
pub fn generate_with(n: usize, config: GeneratorConfig) -> Result<MagicSquare, SquareError> {
    Generator::run(Order::new(n)?, config)
}

/// Render a square as bordered text.
pub fn render(square: &MagicSquare) -> String {
    square.to_string()
}
