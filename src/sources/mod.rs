//! Concrete interval sources for the cover solver.
//!
//! These modules show how to implement
//! [`IntervalSource`](crate::traits::IntervalSource) for common interval
//! storage shapes.
//!
//! They are both usable and serve as templates:
//! - [`slice`] : chains borrowed from a slice of `(left, right)` pairs.
//! - [`func`]  : chains defined by a pair of endpoint accessor closures.
//! - [`synth`] : reproducible synthetic chains for tests and benchmarks.

pub mod func;
pub mod slice;
pub mod synth;
