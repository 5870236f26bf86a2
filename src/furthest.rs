//! Furthest-jump table construction.
//!
//! `furthest[i]` is the largest index `j >= i` whose left endpoint still
//! lies within interval `i`, i.e. `left(j) <= right(i)`. Following the table
//! from index 0 walks exactly the greedy cover path, so everything downstream
//! treats it as a successor pointer.
//!
//! Both endpoint sequences are non-decreasing, which makes the table a merge
//! of two sorted sequences. The parallel build splits the left sequence at
//! its midpoint, binary-searches the midpoint's answer among the candidates,
//! and forks the two halves: answers left of the midpoint cannot pass it,
//! answers right of it cannot precede it. Leaves below the merge grain run
//! the plain two-pointer merge.

use crate::traits::IntervalSource;

/// Fill `out[i] = max { j >= i : left(j) <= right(i) }` for the whole chain.
///
/// `out.len()` must equal `source.len()`. The recursion forks both halves at
/// every level, handing each task a disjoint subslice of `out`.
#[cfg(feature = "parallel")]
pub(crate) fn fill_furthest<S>(source: &S, out: &mut [usize], merge_grain: usize)
where
    S: IntervalSource + Sync,
{
    assert_eq!(out.len(), source.len(), "table length must match the chain");
    assert!(merge_grain > 0, "merge grain must be positive");
    let n = out.len();
    if n == 0 {
        return;
    }
    fill_range(source, out, 0, 0, n - 1, merge_grain);
}

/// Fill the furthest-jump table without forking (serial recursion).
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_furthest<S>(source: &S, out: &mut [usize], merge_grain: usize)
where
    S: IntervalSource,
{
    assert_eq!(out.len(), source.len(), "table length must match the chain");
    assert!(merge_grain > 0, "merge grain must be positive");
    let n = out.len();
    if n == 0 {
        return;
    }
    fill_range(source, out, 0, 0, n - 1, merge_grain);
}

/// Reference build: one two-pointer pass over the whole chain.
///
/// Ground truth for the recursive build; the solver cross-checks against it
/// under `debug_assertions` and the tests compare against it directly.
pub(crate) fn fill_furthest_serial<S: IntervalSource>(source: &S, out: &mut [usize]) {
    assert_eq!(out.len(), source.len(), "table length must match the chain");
    let n = out.len();
    if n == 0 {
        return;
    }
    merge_serial(source, out, 0, 0, n - 1);
}

/// Fill `out` (covering global indices `ll..=ll + out.len() - 1`) using only
/// candidate indices in `rl..=rr`.
///
/// Window invariant: for every covered `i`, the answer lies in `rl..=rr`.
#[cfg(feature = "parallel")]
fn fill_range<S>(source: &S, out: &mut [usize], ll: usize, rl: usize, rr: usize, merge_grain: usize)
where
    S: IntervalSource + Sync,
{
    if out.is_empty() {
        return;
    }
    if out.len() + (rr - rl + 1) <= merge_grain {
        merge_serial(source, out, ll, rl, rr);
        return;
    }

    let lr = ll + out.len() - 1;
    let lmid = ll + (lr - ll) / 2;
    let k = last_reachable(source, source.right(lmid), lmid.max(rl), rr);

    let (left_out, rest) = out.split_at_mut(lmid - ll);
    let (mid_slot, right_out) = rest.split_first_mut().expect("midpoint slot must exist");
    *mid_slot = k;

    rayon::join(
        || fill_range(source, left_out, ll, rl, k, merge_grain),
        || fill_range(source, right_out, lmid + 1, k, rr, merge_grain),
    );
}

#[cfg(not(feature = "parallel"))]
fn fill_range<S>(source: &S, out: &mut [usize], ll: usize, rl: usize, rr: usize, merge_grain: usize)
where
    S: IntervalSource,
{
    if out.is_empty() {
        return;
    }
    if out.len() + (rr - rl + 1) <= merge_grain {
        merge_serial(source, out, ll, rl, rr);
        return;
    }

    let lr = ll + out.len() - 1;
    let lmid = ll + (lr - ll) / 2;
    let k = last_reachable(source, source.right(lmid), lmid.max(rl), rr);

    let (left_out, rest) = out.split_at_mut(lmid - ll);
    let (mid_slot, right_out) = rest.split_first_mut().expect("midpoint slot must exist");
    *mid_slot = k;

    fill_range(source, left_out, ll, rl, k, merge_grain);
    fill_range(source, right_out, lmid + 1, k, rr, merge_grain);
}

/// Two-pointer merge: the candidate cursor only ever moves right because both
/// endpoint sequences are non-decreasing.
fn merge_serial<S: IntervalSource>(source: &S, out: &mut [usize], ll: usize, rl: usize, rr: usize) {
    let mut rid = rl;
    for (k, slot) in out.iter_mut().enumerate() {
        let i = ll + k;
        let bound = source.right(i);
        while rid <= rr && source.left(rid) <= bound {
            rid += 1;
        }
        debug_assert!(rid > rl, "candidate window excludes interval {i}");
        let j = rid - 1;
        debug_assert!(j >= i, "furthest jump points backwards at {i}");
        *slot = j;
    }
}

/// Largest `k` in `lo..=hi` with `left(k) <= bound`.
///
/// `left(lo) <= bound` must already hold; the window invariant of the
/// recursion guarantees it.
fn last_reachable<S: IntervalSource>(
    source: &S,
    bound: S::Endpoint,
    mut lo: usize,
    mut hi: usize,
) -> usize {
    debug_assert!(lo <= hi);
    debug_assert!(source.left(lo) <= bound);
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if source.left(mid) <= bound {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}
