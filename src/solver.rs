//! The cover solver: phase orchestration over a monotone interval chain.
//!
//! [`CoverSolver`] owns the scratch state of one solve: the furthest-jump
//! table, the sampled sketch, and the output mask. A single [`run`] call
//! executes the phases in order with an implicit barrier between them; each
//! phase writes buffers the next one only reads, so no synchronization
//! beyond the fork-join joins is ever needed.
//!
//! [`run`]: CoverSolver::run

use crate::furthest;
use crate::sampling::{self, SampleSet};
use crate::sketch;
use crate::traits::IntervalSource;
use crate::utils::{DEFAULT_MERGE_GRAIN, DEFAULT_SAMPLE_BLOCK, DEFAULT_SERIAL_CUTOVER};
#[cfg(all(debug_assertions, feature = "parallel"))]
use rayon::prelude::*;

/// Minimum-cover solver for a given interval source `S`.
///
/// Typical usage:
/// ```
/// use chain_cover::{sources::slice::SliceSource, CoverSolver};
///
/// let intervals = [(0, 5), (1, 8), (3, 10), (7, 15), (12, 20)];
/// let mut solver = CoverSolver::new(SliceSource::new(&intervals));
/// solver.run();
/// assert!(solver.valid()[0] && solver.valid()[4]);
/// ```
pub struct CoverSolver<S: IntervalSource> {
    source: S,
    merge_grain: usize,
    sample_block: usize,
    serial_cutover: usize,
    seed: u64,
    furthest_id: Vec<usize>,
    samples: SampleSet,
    sampled_next: Vec<usize>,
    path_nodes: Vec<usize>,
    valid: Vec<bool>,
}

impl<S: IntervalSource> CoverSolver<S> {
    /// Create a solver with default tuning. O(1); nothing is computed until
    /// [`run`](Self::run).
    pub fn new(source: S) -> Self {
        Self::with_tuning(
            source,
            DEFAULT_MERGE_GRAIN,
            DEFAULT_SAMPLE_BLOCK,
            DEFAULT_SERIAL_CUTOVER,
            0,
        )
    }

    pub(crate) fn with_tuning(
        source: S,
        merge_grain: usize,
        sample_block: usize,
        serial_cutover: usize,
        seed: u64,
    ) -> Self {
        assert!(merge_grain > 0, "merge grain must be positive");
        assert!(sample_block > 0, "sample block must be positive");
        Self {
            source,
            merge_grain,
            sample_block,
            serial_cutover,
            seed,
            furthest_id: Vec::new(),
            samples: SampleSet {
                mask: Vec::new(),
                ids: Vec::new(),
            },
            sampled_next: Vec::new(),
            path_nodes: Vec::new(),
            valid: Vec::new(),
        }
    }

    /// Expose an immutable reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The cover mask: `valid()[i]` iff interval `i` is in the minimum
    /// cover. Meaningful after [`run`](Self::run) or
    /// [`run_serial`](Self::run_serial); empty before.
    pub fn valid(&self) -> &[bool] {
        &self.valid
    }

    /// Consume the solver and keep only the cover mask.
    pub fn into_valid(self) -> Vec<bool> {
        self.valid
    }

    /// Number of intervals selected into the cover.
    pub fn num_selected(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// One-pass serial greedy: the ground-truth kernel.
    ///
    /// Produces exactly the mask [`run`](Self::run) produces, in O(n) time
    /// on one thread. Kept public as the baseline for benchmarks and
    /// cross-validation.
    pub fn run_serial(&mut self) {
        let n = self.source.len();
        self.valid.clear();
        self.valid.resize(n, false);
        if n == 0 {
            return;
        }
        #[cfg(debug_assertions)]
        self.debug_validate();
        kernel_serial(&self.source, &mut self.valid);
    }

    /// Check the input contract, naming the first offending index.
    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        let n = self.source.len();
        for i in 0..n {
            assert!(
                self.source.left(i) < self.source.right(i),
                "empty interval at index {i}"
            );
        }
        for i in 0..n.saturating_sub(1) {
            assert!(
                self.source.left(i) <= self.source.left(i + 1),
                "left endpoints decrease at index {i}"
            );
            assert!(
                self.source.right(i) <= self.source.right(i + 1),
                "right endpoints decrease at index {i}"
            );
            assert!(
                self.source.left(i + 1) <= self.source.right(i),
                "chain gap after index {i}"
            );
        }
    }
}

#[cfg(feature = "parallel")]
impl<S> CoverSolver<S>
where
    S: IntervalSource + Sync,
{
    /// Compute the minimum cover.
    ///
    /// Empty chains produce an empty mask with no further allocation; one-
    /// and two-interval chains are trivially all selected; chains up to the
    /// serial cutover run the one-pass kernel; everything larger runs the
    /// parallel pipeline. All paths produce pointwise identical masks.
    ///
    /// # Panics
    /// Panics under `debug_assertions` if the source violates the
    /// [`IntervalSource`] contract, naming the offending index. Release
    /// builds assume the contract.
    pub fn run(&mut self) {
        let n = self.source.len();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("cover_run", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.valid.clear();
        self.valid.resize(n, false);
        if n == 0 {
            return;
        }
        if n <= 2 {
            self.valid.fill(true);
            return;
        }
        if n <= self.serial_cutover {
            #[cfg(debug_assertions)]
            self.debug_validate();
            kernel_serial(&self.source, &mut self.valid);
            return;
        }

        #[cfg(debug_assertions)]
        self.debug_validate_parallel();
        self.pipeline();
    }

    fn pipeline(&mut self) {
        let n = self.source.len();

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_furthest", n);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.furthest_id.clear();
            self.furthest_id.resize(n, 0);
            furthest::fill_furthest(&self.source, &mut self.furthest_id, self.merge_grain);
        }

        #[cfg(debug_assertions)]
        {
            let mut reference = vec![0usize; n];
            furthest::fill_furthest_serial(&self.source, &mut reference);
            for (i, (&got, &want)) in self.furthest_id.iter().zip(&reference).enumerate() {
                debug_assert_eq!(got, want, "furthest-jump mismatch at index {i}");
            }
        }

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("select_samples", block = self.sample_block);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.samples = sampling::select_samples(n, self.sample_block, self.seed);
        }

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("connect_samples", sampled = self.samples.ids.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.sampled_next = sketch::connect_samples(&self.furthest_id, &self.samples);
        }

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("scan_sketch");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.path_nodes = sketch::scan_sketch(&self.samples, &self.sampled_next, &mut self.valid);
        }

        {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("expand_segments", segments = self.path_nodes.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            sketch::expand_segments(&self.furthest_id, &self.path_nodes, &mut self.valid);
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate_parallel(&self) {
        let n = self.source.len();
        (0..n).into_par_iter().for_each(|i| {
            assert!(
                self.source.left(i) < self.source.right(i),
                "empty interval at index {i}"
            );
        });
        (0..n.saturating_sub(1)).into_par_iter().for_each(|i| {
            assert!(
                self.source.left(i) <= self.source.left(i + 1),
                "left endpoints decrease at index {i}"
            );
            assert!(
                self.source.right(i) <= self.source.right(i + 1),
                "right endpoints decrease at index {i}"
            );
            assert!(
                self.source.left(i + 1) <= self.source.right(i),
                "chain gap after index {i}"
            );
        });
    }
}

#[cfg(not(feature = "parallel"))]
impl<S: IntervalSource> CoverSolver<S> {
    /// Compute the minimum cover (serial execution).
    ///
    /// Same dispatch and same output as the parallel build; every fork
    /// point degenerates to sequential calls.
    ///
    /// # Panics
    /// Panics under `debug_assertions` if the source violates the
    /// [`IntervalSource`] contract, naming the offending index.
    pub fn run(&mut self) {
        let n = self.source.len();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("cover_run", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.valid.clear();
        self.valid.resize(n, false);
        if n == 0 {
            return;
        }
        if n <= 2 {
            self.valid.fill(true);
            return;
        }
        if n <= self.serial_cutover {
            #[cfg(debug_assertions)]
            self.debug_validate();
            kernel_serial(&self.source, &mut self.valid);
            return;
        }

        #[cfg(debug_assertions)]
        self.debug_validate();
        self.pipeline();
    }

    fn pipeline(&mut self) {
        let n = self.source.len();

        self.furthest_id.clear();
        self.furthest_id.resize(n, 0);
        furthest::fill_furthest(&self.source, &mut self.furthest_id, self.merge_grain);

        #[cfg(debug_assertions)]
        {
            let mut reference = vec![0usize; n];
            furthest::fill_furthest_serial(&self.source, &mut reference);
            for (i, (&got, &want)) in self.furthest_id.iter().zip(&reference).enumerate() {
                debug_assert_eq!(got, want, "furthest-jump mismatch at index {i}");
            }
        }

        self.samples = sampling::select_samples(n, self.sample_block, self.seed);
        self.sampled_next = sketch::connect_samples(&self.furthest_id, &self.samples);
        self.path_nodes = sketch::scan_sketch(&self.samples, &self.sampled_next, &mut self.valid);
        sketch::expand_segments(&self.furthest_id, &self.path_nodes, &mut self.valid);
    }
}

/// The classical greedy in one forward pass.
///
/// `left(i + 1) > right(last)` means interval `i + 1` would fall outside the
/// cover if `i` were skipped, so `i` is the furthest-reaching interval still
/// overlapping the cover and must be selected.
fn kernel_serial<S: IntervalSource>(source: &S, valid: &mut [bool]) {
    let n = valid.len();
    let mut last = 0;
    for i in 1..n.saturating_sub(1) {
        if source.left(i + 1) > source.right(last) {
            valid[i] = true;
            last = i;
        }
    }
    valid[0] = true;
    valid[n - 1] = true;
}
