//! Benchmark comparison report.
//!
//! Parses two Go benchmark logs (turbo vs non-turbo runs) and prints
//! per-command comparison tables plus an aggregate summary.
//!
//! Takes no arguments: the logs are expected as `benchmark_noturbo.txt` and
//! `benchmark_turbo.txt` in the working directory. Exits 1 if either file is
//! missing.

use std::collections::HashMap;
use std::process;

use turbo_compare::bench::parse_benchmark_log;
use turbo_compare::merge::inner_join;
use turbo_compare::report;
use turbo_compare::schema::BenchmarkRecord;

const NOTURBO_LOG: &str = "benchmark_noturbo.txt";
const TURBO_LOG: &str = "benchmark_turbo.txt";

fn main() {
    let noturbo = load_results(NOTURBO_LOG);
    let turbo = load_results(TURBO_LOG);

    // Only keys present in both logs carry a meaningful improvement.
    let matched = inner_join(&noturbo, &turbo);

    print!("{}", report::bench_report_title());
    print!("{}", report::render_benchmark_comparison(&matched));
}

fn load_results(path: &str) -> HashMap<String, BenchmarkRecord> {
    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    });
    parse_benchmark_log(&contents)
}
