//! Sampled contraction of the jump chain.
//!
//! Three phases turn the furthest-jump table into the cover mask:
//!
//! 1. *Connect*: from every sampled node, walk the jump table to the next
//!    sampled node. This contracts the chain to a sketch of about `n / B`
//!    nodes; walk lengths are geometric in expectation, so the expected
//!    total work stays linear.
//! 2. *Scan*: follow the contracted successors serially from node 0. The
//!    sampled nodes visited are exactly the sampled nodes on the greedy
//!    path, in path order.
//! 3. *Expand*: for each scanned segment, walk the jump table again and mark
//!    the interior nodes. Segments own disjoint index ranges, so the mask is
//!    split into per-segment subslices and the walks fork freely.

use crate::sampling::SampleSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// For every sampled node, the rank (position in `samples.ids`) of the next
/// sampled node reached by the furthest-jump closure.
///
/// The chain end is its own successor; the scan stops there and never
/// follows it.
#[cfg(feature = "parallel")]
pub(crate) fn connect_samples(furthest: &[usize], samples: &SampleSet) -> Vec<usize> {
    samples
        .ids
        .par_iter()
        .map(|&s| next_sampled_rank(furthest, samples, s))
        .collect()
}

/// Serial build of the contracted successor table.
#[cfg(not(feature = "parallel"))]
pub(crate) fn connect_samples(furthest: &[usize], samples: &SampleSet) -> Vec<usize> {
    samples
        .ids
        .iter()
        .map(|&s| next_sampled_rank(furthest, samples, s))
        .collect()
}

fn next_sampled_rank(furthest: &[usize], samples: &SampleSet, s: usize) -> usize {
    let mut id = furthest[s];
    while !samples.mask[id] {
        id = furthest[id];
    }
    samples
        .ids
        .binary_search(&id)
        .expect("sampled node missing from the packed id list")
}

/// Serial scan over the contracted sketch.
///
/// Marks every sampled node on the greedy path in `valid` (including the
/// chain end) and returns those nodes in path order, chain end excluded.
/// The sketch has about `n / B` nodes, so the pass is short by construction.
pub(crate) fn scan_sketch(
    samples: &SampleSet,
    sampled_next: &[usize],
    valid: &mut [bool],
) -> Vec<usize> {
    let n = valid.len();
    debug_assert!(n >= 2);
    debug_assert_eq!(samples.ids.len(), sampled_next.len());

    let mut path = Vec::new();
    let mut rank = 0;
    loop {
        let id = samples.ids[rank];
        if id == n - 1 {
            break;
        }
        path.push(id);
        valid[id] = true;
        let next = sampled_next[rank];
        debug_assert!(next > rank, "contracted successor must make progress");
        rank = next;
    }
    valid[n - 1] = true;
    path
}

/// Mark the non-sampled greedy-path nodes.
///
/// `path` is the scan output; each consecutive pair of path nodes (with the
/// chain end closing the last segment) bounds one stretch of the jump chain.
/// Interior nodes of a segment fall strictly between its bounds, so each
/// walk writes a disjoint range of `valid`.
pub(crate) fn expand_segments(furthest: &[usize], path: &[usize], valid: &mut [bool]) {
    let n = valid.len();
    if path.is_empty() {
        return;
    }
    let segments: Vec<(usize, usize)> = (0..path.len())
        .map(|k| (path[k], path.get(k + 1).copied().unwrap_or(n - 1)))
        .collect();
    expand_rec(furthest, &segments, valid, 0);
}

/// Recursive halving over the segment list; the mask slice is split at each
/// level so both halves can be walked at once.
#[cfg(feature = "parallel")]
fn expand_rec(furthest: &[usize], segments: &[(usize, usize)], window: &mut [bool], base: usize) {
    match segments.len() {
        0 => {}
        1 => walk_segment(furthest, segments[0], window, base),
        _ => {
            let mid = segments.len() / 2;
            let (lo, hi) = segments.split_at(mid);
            // hi starts at a path node; everything lo writes lies below it.
            let boundary = hi[0].0 + 1 - base;
            let (left_window, right_window) = window.split_at_mut(boundary);
            rayon::join(
                || expand_rec(furthest, lo, left_window, base),
                || expand_rec(furthest, hi, right_window, hi[0].0 + 1),
            );
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn expand_rec(furthest: &[usize], segments: &[(usize, usize)], window: &mut [bool], base: usize) {
    for &segment in segments {
        walk_segment(furthest, segment, window, base);
    }
}

fn walk_segment(furthest: &[usize], (start, end): (usize, usize), window: &mut [bool], base: usize) {
    let mut id = furthest[start];
    while id != end {
        assert!(id < end, "jump chain overshot its segment at {id}");
        window[id - base] = true;
        id = furthest[id];
    }
}
