//! Minimum-cost paths across a cost grid under a run constraint.
//!
//! A path starts in the top-left cell, ends in the bottom-right cell, and
//! moves in straight runs: every run covers between `min` and `max` cells
//! (see [`RunLimits`]), and each run turns 90° from the previous one. A path
//! pays the cost of every cell it enters.
//!
//! The search is Dijkstra's algorithm over a [`StateSpace`] whose vertices are
//! (cell, arrival orientation) pairs and whose edges are whole runs, driven by
//! an indexed [`Frontier`] that supports decrease-key.
//!
//! ```
//! use runpath_core::CostGrid;
//! use runpath_paths::{PathSolver, RunLimits};
//!
//! let grid: CostGrid = "1111\n9991\n9991".parse().unwrap();
//! let sol = PathSolver::new().solve(&grid, RunLimits::STANDARD).unwrap().unwrap();
//! assert_eq!(sol.cost, 5);
//! ```
//!
//! # Components
//!
//! | Type | Role |
//! |---|---|
//! | [`CostMap`] | cell cost source (implemented by [`CostGrid`](runpath_core::CostGrid)) |
//! | [`StateSpace`] | vertex arena and run-edge generation |
//! | [`Frontier`] | min-heap with stable handles |
//! | [`PathSolver`] | the relaxation loop |

mod frontier;
mod limits;
mod solver;
mod state;
mod traits;

pub use frontier::{Frontier, FrontierEntry, FrontierError, Handle};
pub use limits::RunLimits;
pub use solver::{PathSolver, Solution, SolveError, solve};
pub use state::{Edge, Orientation, StateSpace, Vertex};
pub use traits::CostMap;
