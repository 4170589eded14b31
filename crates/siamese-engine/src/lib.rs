//! Siamese-method magic square generation.
//!
//! The [`Generator`] owns a zeroed [`Grid`](siamese_grid::Grid), places `1`
//! at the rule's start cell, then places `2..=n²` one at a time, each at the
//! coordinate chosen by [`next_coordinate`]. A completed generator is
//! converted into an immutable [`MagicSquare`], which can be verified with
//! [`MagicSquare::verify`] and rendered through its `Display` impl.
//!
//! # Step rules
//!
//! - [`StepRule::Inverted`]: start at the middle of the bottom row, step
//!   down-right, fall back one row up on collision.
//! - [`StepRule::Classic`]: the textbook method. Start at the middle of the
//!   top row, step up-right, fall back one row down on collision.
//!
//! The two rules produce vertical mirror images of each other.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod render;
pub mod square;
pub mod step;
pub mod verify;

pub use config::GeneratorConfig;
pub use generator::{Generator, Phase, Placement};
pub use square::MagicSquare;
pub use step::{next_coordinate, StepRule};
pub use verify::LineSums;
