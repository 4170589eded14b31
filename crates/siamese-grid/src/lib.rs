//! Square grid storage for magic square generation.
//!
//! [`Grid`] owns a contiguous row-major buffer of `n²` cells with
//! bounds-checked access. The [`wrap`] module resolves single-cell steps
//! across the grid edges onto the opposite side (torus topology).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod wrap;

pub use grid::Grid;
