use std::env;
use std::time::Instant;

use chain_cover::sources::synth::SyntheticChain;
use chain_cover::{CoverSolver, CoverSolverBuilder};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("cover_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(72));
    eprintln!("Interval Cover Scaling Probe: serial vs parallel");
    eprintln!("{}", "=".repeat(72));
    eprintln!();
    eprintln!("Runs both solvers over synthetic monotone chains of growing size,");
    eprintln!("verifies that the masks agree pointwise, and reports throughput.");
    eprintln!("CSV rows go to stdout; everything else goes to stderr.");
    eprintln!();

    let mut rows = Vec::new();
    for &n in &options.sizes {
        if n > options.max_n {
            break;
        }
        eprint!("n = {n} ...");
        let chain = SyntheticChain::with_seed(n, options.seed);

        let (serial_ms, serial_mask) = {
            let mut solver = CoverSolver::new(&chain);
            let start = Instant::now();
            solver.run_serial();
            (start.elapsed().as_secs_f64() * 1e3, solver.into_valid())
        };

        let (parallel_ms, parallel_mask) = {
            let mut solver = CoverSolverBuilder::new(&chain)
                .with_serial_cutover(0)
                .build();
            let start = Instant::now();
            solver.run();
            (start.elapsed().as_secs_f64() * 1e3, solver.into_valid())
        };

        if serial_mask != parallel_mask {
            eprintln!("\ncover_probe: serial and parallel masks disagree at n = {n}");
            std::process::exit(1);
        }
        let num_selected = serial_mask.iter().filter(|&&v| v).count();
        eprintln!(
            "\rn = {n}: serial {serial_ms:.2} ms, parallel {parallel_ms:.2} ms, \
             {num_selected} selected, speedup {:.2}x",
            serial_ms / parallel_ms
        );

        rows.push(Row {
            algorithm: "serial",
            n,
            threads: 1,
            time_ms: serial_ms,
            num_selected,
        });
        rows.push(Row {
            algorithm: "parallel",
            n,
            threads: worker_threads(),
            time_ms: parallel_ms,
            num_selected,
        });
    }

    println!("algorithm,n,threads,time_ms,num_selected,throughput_M_per_sec");
    for row in &rows {
        let throughput = row.n as f64 / (row.time_ms / 1e3) / 1e6;
        println!(
            "{},{},{},{:.3},{},{:.2}",
            row.algorithm, row.n, row.threads, row.time_ms, row.num_selected, throughput
        );
    }
}

struct Row {
    algorithm: &'static str,
    n: usize,
    threads: usize,
    time_ms: f64,
    num_selected: usize,
}

#[cfg(feature = "parallel")]
fn worker_threads() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn worker_threads() -> usize {
    1
}

struct Options {
    sizes: Vec<usize>,
    max_n: usize,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut max_n = 10_000_000usize;
        let mut seed = 42u64;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--max-n=") {
                max_n = value
                    .parse::<usize>()
                    .map_err(|_| "max n must be a positive integer".to_string())?;
            } else if arg == "--max-n" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --max-n".to_string())?
                    .into();
                max_n = value
                    .parse::<usize>()
                    .map_err(|_| "max n must be a positive integer".to_string())?;
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = value
                    .parse::<u64>()
                    .map_err(|_| "seed must be an unsigned integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument: {arg}"));
            }
        }

        let sizes = vec![
            1_000, 2_000, 5_000, 10_000, 20_000, 50_000, 100_000, 200_000, 500_000, 1_000_000,
            2_000_000, 5_000_000, 10_000_000,
        ];

        Ok(Options { sizes, max_n, seed })
    }

    fn print_help() {
        eprintln!("usage: cover_probe [--max-n=N] [--seed=S]");
        eprintln!("  --max-n=N   stop the size sweep above N (default 10000000)");
        eprintln!("  --seed=S    chain generator seed (default 42)");
    }
}
