//! Core types for Siamese magic square generation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary used throughout the workspace: grid coordinates,
//! the validated square order, square lines, and the shared error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod line;
pub mod order;

pub use coord::Coord;
pub use error::SquareError;
pub use line::Line;
pub use order::Order;
