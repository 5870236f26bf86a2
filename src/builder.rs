use crate::solver::CoverSolver;
use crate::traits::IntervalSource;
use crate::utils::{DEFAULT_MERGE_GRAIN, DEFAULT_SAMPLE_BLOCK, DEFAULT_SERIAL_CUTOVER};

pub struct CoverSolverBuilder<S: IntervalSource> {
    source: S,
    merge_grain: usize,
    sample_block: usize,
    serial_cutover: usize,
    seed: u64,
}

impl<S: IntervalSource> CoverSolverBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            merge_grain: DEFAULT_MERGE_GRAIN,
            sample_block: DEFAULT_SAMPLE_BLOCK,
            serial_cutover: DEFAULT_SERIAL_CUTOVER,
            seed: 0,
        }
    }

    pub fn with_merge_grain(mut self, merge_grain: usize) -> Self {
        self.merge_grain = merge_grain;
        self
    }

    pub fn with_sample_block(mut self, sample_block: usize) -> Self {
        self.sample_block = sample_block;
        self
    }

    pub fn with_serial_cutover(mut self, serial_cutover: usize) -> Self {
        self.serial_cutover = serial_cutover;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> CoverSolver<S> {
        CoverSolver::with_tuning(
            self.source,
            self.merge_grain,
            self.sample_block,
            self.serial_cutover,
            self.seed,
        )
    }
}
