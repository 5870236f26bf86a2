//! Reproducible synthetic chains for tests and benchmarks.
//!
//! Chains are generated from a counter-indexed hash, so the same `(n, seed,
//! params)` triple always yields the same intervals, with no RNG state to
//! thread through. The parameter constraints guarantee the generated chain
//! satisfies the full [`IntervalSource`](crate::traits::IntervalSource)
//! contract by construction:
//!
//! - `step_max <= len_min` keeps consecutive intervals overlapping;
//! - `step_min > len_max - len_min` keeps right endpoints strictly
//!   increasing.

use crate::sampling::index_hash;
use crate::traits::IntervalSource;

/// Generation parameters: the left endpoint advances by a step in
/// `[step_min, step_max]` per interval, and each interval has a length in
/// `[len_min, len_max]`.
#[derive(Clone, Copy, Debug)]
pub struct ChainParams {
    pub seed: u64,
    pub step_min: i64,
    pub step_max: i64,
    pub len_min: i64,
    pub len_max: i64,
}

impl Default for ChainParams {
    fn default() -> Self {
        Self {
            seed: 42,
            step_min: 5,
            step_max: 15,
            len_min: 20,
            len_max: 24,
        }
    }
}

/// A materialized synthetic chain.
#[derive(Clone, Debug)]
pub struct SyntheticChain {
    lefts: Vec<i64>,
    rights: Vec<i64>,
}

impl SyntheticChain {
    /// Generate `n` intervals with the default parameters.
    pub fn new(n: usize) -> Self {
        Self::with_params(n, ChainParams::default())
    }

    /// Generate `n` intervals with the default shape but a caller-chosen
    /// seed.
    pub fn with_seed(n: usize, seed: u64) -> Self {
        Self::with_params(n, ChainParams {
            seed,
            ..ChainParams::default()
        })
    }

    /// Generate `n` intervals.
    ///
    /// # Panics
    /// Panics if the parameters violate the constraints that make the
    /// generated chain a valid input (see the module docs).
    pub fn with_params(n: usize, params: ChainParams) -> Self {
        assert!(
            params.step_max <= params.len_min,
            "step_max must be <= len_min or the chain would have gaps"
        );
        assert!(
            params.step_min > params.len_max - params.len_min,
            "step_min must exceed len_max - len_min or right endpoints could decrease"
        );
        assert!(params.step_min > 0 && params.len_min > 0);
        assert!(params.step_min <= params.step_max);
        assert!(params.len_min <= params.len_max);

        let step_span = (params.step_max - params.step_min + 1) as u64;
        let len_span = (params.len_max - params.len_min + 1) as u64;

        let mut lefts = Vec::with_capacity(n);
        let mut rights = Vec::with_capacity(n);
        let mut left = 0i64;
        for i in 0..n as u64 {
            let step = params.step_min + (index_hash(params.seed, 2 * i) % step_span) as i64;
            let len = params.len_min + (index_hash(params.seed, 2 * i + 1) % len_span) as i64;
            if i > 0 {
                left += step;
            }
            lefts.push(left);
            rights.push(left + len);
        }

        Self { lefts, rights }
    }
}

impl IntervalSource for SyntheticChain {
    type Endpoint = i64;

    fn len(&self) -> usize {
        self.lefts.len()
    }

    fn left(&self, i: usize) -> i64 {
        self.lefts[i]
    }

    fn right(&self, i: usize) -> i64 {
        self.rights[i]
    }
}

#[cfg(test)]
mod tests {
    use super::{ChainParams, SyntheticChain};
    use crate::traits::IntervalSource;

    fn assert_valid_chain(chain: &SyntheticChain) {
        let n = chain.len();
        for i in 0..n {
            assert!(chain.left(i) < chain.right(i), "empty interval at {i}");
        }
        for i in 0..n.saturating_sub(1) {
            assert!(chain.left(i) < chain.left(i + 1));
            assert!(chain.right(i) < chain.right(i + 1));
            assert!(chain.left(i + 1) <= chain.right(i), "gap after {i}");
        }
    }

    #[test]
    fn default_params_generate_a_valid_chain() {
        for n in [1, 2, 10, 1000] {
            assert_valid_chain(&SyntheticChain::new(n));
        }
    }

    #[test]
    fn seeds_reproduce_and_differ() {
        let a = SyntheticChain::with_seed(500, 7);
        let b = SyntheticChain::with_seed(500, 7);
        let c = SyntheticChain::with_seed(500, 8);
        assert_eq!(a.lefts, b.lefts);
        assert_eq!(a.rights, b.rights);
        assert_ne!(a.rights, c.rights);
        assert_valid_chain(&c);
    }

    #[test]
    fn touching_chains_are_representable() {
        // step == len everywhere: consecutive intervals share one point.
        let chain = SyntheticChain::with_params(64, ChainParams {
            seed: 1,
            step_min: 10,
            step_max: 10,
            len_min: 10,
            len_max: 10,
        });
        assert_valid_chain(&chain);
        for i in 0..chain.len() - 1 {
            assert_eq!(chain.left(i + 1), chain.right(i));
        }
    }

    #[test]
    #[should_panic(expected = "gaps")]
    fn rejects_step_ranges_that_can_leave_gaps() {
        let _ = SyntheticChain::with_params(10, ChainParams {
            seed: 0,
            step_min: 5,
            step_max: 30,
            len_min: 20,
            len_max: 24,
        });
    }
}
