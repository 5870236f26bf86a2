//! Core trait definitions for interval chains.
//!
//! To run the cover solver over your own interval storage, implement
//! [`IntervalSource`] for a struct that captures your instance (a slice of
//! pairs, two parallel arrays, a pair of accessor closures, ...).
//!
//! The trait encodes the input contract of the algorithm:
//! - Indexed access: intervals are addressed by `0..len()`.
//! - Monotone endpoints: both endpoint sequences are non-decreasing.
//! - Chain connectivity: consecutive intervals overlap or touch, so the
//!   union of the chain is a single segment.
//!
//! The solver orchestrates everything else using only these accessors.

/// A chain of `len()` intervals addressed by index.
///
/// # Contract
/// Implementations must guarantee, for all `i < len()`:
///
/// - `left(i) <= left(i + 1)` and `right(i) <= right(i + 1)`
///   (weak monotonicity of both endpoint sequences);
/// - `left(i) < right(i)` (non-empty intervals);
/// - `left(i + 1) <= right(i)` (no gap between consecutive intervals).
///
/// Both accessors must be pure: idempotent, side-effect free, and safe to
/// call concurrently from multiple worker threads. The solver may call them
/// O(log n) times per index.
///
/// The contract is checked under `debug_assertions` when the solver runs;
/// release builds assume it and promise nothing on violating inputs.
pub trait IntervalSource {
    /// Endpoint type. Any totally ordered `Copy` type works; signed
    /// integers are typical.
    type Endpoint: Copy + Ord;

    /// Number of intervals in the chain.
    fn len(&self) -> usize;

    /// Returns true if the chain has no intervals.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Left endpoint of interval `i`. `i` must be in `0..len()`.
    fn left(&self, i: usize) -> Self::Endpoint;

    /// Right endpoint of interval `i`. `i` must be in `0..len()`.
    fn right(&self, i: usize) -> Self::Endpoint;
}

impl<S: IntervalSource + ?Sized> IntervalSource for &S {
    type Endpoint = S::Endpoint;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn left(&self, i: usize) -> Self::Endpoint {
        (**self).left(i)
    }

    fn right(&self, i: usize) -> Self::Endpoint {
        (**self).right(i)
    }
}
