use chain_cover::sources::slice::SliceSource;
use chain_cover::{CoverSolver, CoverSolverBuilder};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessExt, ProcessRefreshKind, System, SystemExt};

fn random_chain(rng: &mut StdRng, n: usize) -> Vec<(i64, i64)> {
    let mut intervals = Vec::with_capacity(n);
    let mut left = 0i64;
    for i in 0..n {
        if i > 0 {
            left += rng.gen_range(5..=15);
        }
        let len = rng.gen_range(20..=24);
        intervals.push((left, left + len));
    }
    intervals
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() // KiB on supported platforms
    } else {
        0
    }
}

fn bench_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_cover");
    for &n in &[100_000usize, 1_000_000] {
        group.bench_function(format!("serial_n_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_chain(&mut rng, n)
                },
                |intervals| {
                    let mut solver = CoverSolver::new(SliceSource::new(&intervals));
                    solver.run_serial();
                    criterion::black_box(solver.num_selected());
                },
                BatchSize::PerIteration,
            )
        });

        group.bench_function(format!("parallel_n_{n}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_chain(&mut rng, n)
                },
                |intervals| {
                    let before = rss_kib();
                    let mut solver = CoverSolverBuilder::new(SliceSource::new(&intervals))
                        .with_serial_cutover(0)
                        .build();
                    solver.run();
                    let after = rss_kib();
                    criterion::black_box(solver.num_selected());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (cover {n}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cover);
criterion_main!(benches);
