//! **runpath-core**: core types for run-constrained grid path search.
//!
//! This crate provides the foundational types used across the *runpath*
//! workspace: geometry primitives and the immutable cost grid that the
//! search crates read from.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{CostGrid, GridError};
