//! Extraction of benchmark records from Go benchmark log output.
//!
//! One record per line of the form
//!
//! ```text
//! BenchmarkDcat/cat/small-4  1000  500.0 ns/op  10.0 MB/sec  90.0 hit_rate_%
//! ```
//!
//! The identifier contributes the `type/command/params` key (the `Benchmark`
//! prefix and the trailing GOMAXPROCS suffix are stripped). After the
//! iteration count come `(value, unit)` pairs: `ns/op` and `MB/sec` are
//! mandatory, the rest are optional and tagged by their unit label. Units we
//! do not know about (the benchmark suite also reports `matched_lines`,
//! `files`, `compression_ratio` and the like) are skipped without dropping
//! the record. Any line that does not fit the grammar is skipped; this is
//! lenient extraction over a noisy log, not schema validation.

use std::collections::HashMap;

use crate::schema::BenchmarkRecord;

const IDENT_PREFIX: &str = "Benchmark";

/// Parse a whole benchmark log into a key -> record map.
///
/// A key that appears on several lines keeps the last occurrence.
pub fn parse_benchmark_log(content: &str) -> HashMap<String, BenchmarkRecord> {
    let mut results = HashMap::new();
    for line in content.lines() {
        if let Some((key, record)) = parse_benchmark_line(line) {
            results.insert(key, record);
        }
    }
    results
}

/// Parse a single log line, or `None` if it does not match the grammar.
pub fn parse_benchmark_line(line: &str) -> Option<(String, BenchmarkRecord)> {
    let mut tokens = line.split_whitespace();

    let key = parse_identifier(tokens.next()?)?;

    // Iteration count is required but unused beyond anchoring the grammar.
    tokens.next()?.parse::<u64>().ok()?;

    let mut ns_per_op = None;
    let mut mb_per_sec = None;
    let mut hit_rate_percent = None;
    let mut lines_per_sec = None;
    let mut records_per_sec = None;

    while let Some(value_token) = tokens.next() {
        let Ok(value) = value_token.parse::<f64>() else {
            continue;
        };
        let Some(unit) = tokens.next() else {
            break;
        };
        let field = match unit {
            "ns/op" => &mut ns_per_op,
            "MB/sec" => &mut mb_per_sec,
            "hit_rate_%" => &mut hit_rate_percent,
            "lines/sec" => &mut lines_per_sec,
            "records/sec" => &mut records_per_sec,
            _ => continue,
        };
        *field = Some(value);
    }

    Some((
        key,
        BenchmarkRecord {
            ns_per_op: ns_per_op?,
            mb_per_sec: mb_per_sec?,
            hit_rate_percent,
            lines_per_sec,
            records_per_sec,
        },
    ))
}

/// Reduce `Benchmark<type>/<command>/<params>-<procs>` to
/// `type/command/params`.
///
/// `params` must not itself contain a dash and the suffix must be all digits,
/// matching how the Go test runner names sub-benchmarks.
fn parse_identifier(token: &str) -> Option<String> {
    let ident = token.strip_prefix(IDENT_PREFIX)?;
    let mut segments = ident.splitn(3, '/');
    let test_type = segments.next()?;
    let command = segments.next()?;
    let tail = segments.next()?;

    let (params, procs) = {
        let mut parts = tail.split('-');
        let params = parts.next()?;
        let procs = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        (params, procs)
    };
    if test_type.is_empty() || command.is_empty() || params.is_empty() {
        return None;
    }
    if procs.is_empty() || !procs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}/{}/{}", test_type, command, params))
}

/// Command segment of a `type/command/params` key, used for report grouping.
pub fn command_of(key: &str) -> &str {
    key.split('/').nth(1).unwrap_or(key)
}

/// Params segment of a `type/command/params` key, used as the row label.
pub fn test_name_of(key: &str) -> &str {
    key.splitn(3, '/').nth(2).unwrap_or(key)
}
