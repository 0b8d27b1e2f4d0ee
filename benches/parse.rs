//! Parsing throughput benchmarks for the two extractors.

use criterion::{criterion_group, criterion_main, Criterion};
use turbo_compare::bench::parse_benchmark_log;
use turbo_compare::profile::extract_top_functions;

fn synthetic_pprof_top(rows: usize) -> String {
    let mut out = String::from(
        "File: dcat\nDuration: 1.21s, Total samples = 980ms (81.11%)\n\
         \x20     flat  flat%   sum%        cum\n",
    );
    for i in 0..rows {
        out.push_str(&format!(
            "     {}ms {:.2}% {:.2}% {}ms  github.com/mimecast/dtail/internal/fn{}\n",
            i + 1,
            (i % 40) as f64,
            (i % 100) as f64,
            i + 2,
            i
        ));
    }
    out
}

fn synthetic_benchmark_log(rows: usize) -> String {
    let mut out = String::from("goos: linux\ngoarch: amd64\n");
    for i in 0..rows {
        out.push_str(&format!(
            "BenchmarkDcat/cat/case{}-4  1000  {}.0 ns/op  {}.00 MB/sec  {} lines/sec\n",
            i,
            500 + i,
            10 + i % 20,
            100_000 + i
        ));
    }
    out
}

fn profile_extraction_benchmark(c: &mut Criterion) {
    let output = synthetic_pprof_top(100);

    c.bench_function("extract_top_functions_100", |b| {
        b.iter(|| extract_top_functions(&output))
    });
}

fn benchmark_log_benchmark(c: &mut Criterion) {
    let log = synthetic_benchmark_log(1_000);

    c.bench_function("parse_benchmark_log_1000", |b| {
        b.iter(|| parse_benchmark_log(&log))
    });
}

criterion_group!(benches, profile_extraction_benchmark, benchmark_log_benchmark);
criterion_main!(benches);
