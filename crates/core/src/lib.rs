//! All-pairs shortest paths with exhaustive path reconstruction.
//!
//! A [`GraphModel`] is built from edges (or parsed with [`loader`]), handed to
//! a [`ClosureSolver`] such as [`FloydWarshall`], and comes back as a
//! read-only [`ClosedGraph`] that answers distance, negative-cycle and
//! all-shortest-paths queries.

pub mod cycle;
pub mod loader;
pub mod matrix;
pub mod model;
pub mod paths;
pub mod pred_set;
pub mod report;
pub mod solver;
pub mod traits;

pub use cycle::CycleWitness;
pub use model::{ClosedGraph, GraphModel, MAX_VERTICES};
pub use pred_set::PredecessorSet;
pub use solver::FloydWarshall;
pub use traits::ClosureSolver;
