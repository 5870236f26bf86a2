//! Deterministic sketch sampling over the jump chain.
//!
//! The contraction phases only stay short if the sampled node set is sparse,
//! about one node per [`sample block`](crate::utils::DEFAULT_SAMPLE_BLOCK).
//! Reproducibility matters more than statistical quality here: the same seed
//! must select the same nodes on every run and under every thread count, so
//! selection is driven by a stateless counter-indexed hash rather than a
//! shared RNG.

use crate::utils::expected_sample_count;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Sampled node set: a membership mask over the whole chain plus the packed
/// ascending list of sampled indices.
#[derive(Debug)]
pub(crate) struct SampleSet {
    pub mask: Vec<bool>,
    pub ids: Vec<usize>,
}

/// Stateless 64-bit mix of `(seed, i)`, SplitMix64 style.
///
/// Evaluating index `i` never depends on index `i - 1`, which is what lets
/// the selection run as a flat parallel map.
#[inline]
pub(crate) fn index_hash(seed: u64, i: u64) -> u64 {
    let mut z = seed.wrapping_add(i.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[inline]
fn hit(seed: u64, i: usize, sample_block: u64) -> bool {
    index_hash(seed, i as u64) % sample_block == 0
}

/// Select the sampled node set for an `n`-interval chain.
///
/// Every index is marked with probability about `1 / sample_block`; both
/// chain endpoints are forced in afterwards so the contraction walks always
/// terminate. `ids` lists exactly the set positions of `mask`, ascending.
#[cfg(feature = "parallel")]
pub(crate) fn select_samples(n: usize, sample_block: usize, seed: u64) -> SampleSet {
    assert!(n >= 1, "cannot sample an empty chain");
    assert!(sample_block > 0, "sample block must be positive");
    let block = sample_block as u64;

    let mut mask: Vec<bool> = (0..n).into_par_iter().map(|i| hit(seed, i, block)).collect();
    mask[0] = true;
    mask[n - 1] = true;

    let mut ids: Vec<usize> = Vec::with_capacity(expected_sample_count(n, sample_block));
    ids.par_extend((0..n).into_par_iter().filter(|&i| mask[i]));

    SampleSet { mask, ids }
}

/// Select the sampled node set for an `n`-interval chain (serial build).
#[cfg(not(feature = "parallel"))]
pub(crate) fn select_samples(n: usize, sample_block: usize, seed: u64) -> SampleSet {
    assert!(n >= 1, "cannot sample an empty chain");
    assert!(sample_block > 0, "sample block must be positive");
    let block = sample_block as u64;

    let mut mask: Vec<bool> = (0..n).map(|i| hit(seed, i, block)).collect();
    mask[0] = true;
    mask[n - 1] = true;

    let mut ids: Vec<usize> = Vec::with_capacity(expected_sample_count(n, sample_block));
    ids.extend((0..n).filter(|&i| mask[i]));

    SampleSet { mask, ids }
}
