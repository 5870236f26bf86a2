//! Minimum interval cover over monotone chains.
//!
//! This crate computes the smallest subset of a sorted interval chain whose
//! union equals the union of the whole chain, using a work-efficient
//! fork-join parallel algorithm.
//!
//! ## Core idea
//! 1. Model your intervals as an [`IntervalSource`]: index-addressed left and
//!    right endpoints, both non-decreasing, with no gap between consecutive
//!    intervals.
//! 2. Build the *furthest-jump table*: for every interval, the furthest
//!    interval still overlapping it, via a parallel divide-and-conquer merge
//!    of the two monotone endpoint sequences.
//! 3. Contract the jump chain over a sparse deterministic sample, scan the
//!    short contracted sketch serially, and expand the selected segments back
//!    to the full chain in parallel.
//!
//! The greedy path recovered this way is exactly the minimum cover, and the
//! parallel pipeline produces the same mask as the obvious one-pass serial
//! greedy, bit for bit.
//!
//! ## Quick start
//! ```
//! use chain_cover::{sources::slice::SliceSource, CoverSolver};
//!
//! let intervals = [(0, 5), (3, 10), (9, 14)];
//! let mut solver = CoverSolver::new(SliceSource::new(&intervals));
//! solver.run();
//! assert_eq!(solver.valid(), &[true, true, true]);
//! ```
//!
//! ## Built-in sources
//! The `sources` module contains ready-made [`IntervalSource`] adapters:
//! - slice-backed chains over `&[(T, T)]`
//! - closure-backed chains (endpoint accessor functions)
//! - a reproducible synthetic chain generator for tests and benchmarks
//!
//! These serve both as ready-to-use tools and as templates for adapting your
//! own interval storage.

pub mod builder;
pub mod furthest;
pub mod sampling;
pub mod sketch;
pub mod solver;
pub mod sources;
pub mod traits;
pub mod utils;

pub use crate::builder::CoverSolverBuilder;
pub use crate::solver::CoverSolver;
pub use crate::traits::IntervalSource;
