//! Report rendering.
//!
//! Everything here is a pure function from already-aligned records to text;
//! the improvement math lives in [`crate::metrics`] so it can be verified
//! without string-matching rendered output. Rendering is deterministic: rows
//! are explicitly sorted before display even though the merge maps carry no
//! order of their own.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;

use crate::bench::{command_of, test_name_of};
use crate::merge::union_merge;
use crate::metrics::{signed_improvement, ImprovementSummary, MetricKind};
use crate::schema::{BenchmarkRecord, ProfileFunction, ProfileStats};

/// Maximum display width of a function name before truncation.
const NAME_DISPLAY_MAX: usize = 48;

/// How many profile rows each comparison table shows.
const PROFILE_TOP_K: usize = 10;

/// How many functions each profile contributes. The table shows fewer; the
/// extra rows feed the turbo-marker scan.
pub const PROFILE_TOP_N: usize = 15;

/// Case-insensitive substrings that mark a function as belonging to the
/// turbo-mode code paths.
const TURBO_MARKERS: &[&str] = &["turbo", "optimized", "channelless", "lineprocessor"];

pub fn profile_report_title() -> String {
    format!("DTail Turbo Mode Profile Analysis\n{}\n", "=".repeat(80))
}

pub fn bench_report_title() -> String {
    format!("DTail Turbo Mode Benchmark Comparison\n{}\n", "=".repeat(80))
}

/// Heading for one tool's profile section. Emitted even when the tool's
/// profiles could not be found, so every tool appears in the report.
pub fn profile_section_header(tool: &str) -> String {
    format!(
        "\n{} CPU Profile Comparison\n{}\n",
        tool.to_uppercase(),
        "-".repeat(60)
    )
}

/// Cut `name` to `max` display characters, marking the cut with an ellipsis.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// One tool's baseline-vs-turbo flat-percentage table.
///
/// Function names are deduplicated last-occurrence-wins, the two sides are
/// union-merged with a zero placeholder, and rows are sorted by descending
/// baseline percentage before the top-K slice is taken. The change column is
/// the signed percentage-point delta (turbo minus baseline).
pub fn render_profile_comparison(
    tool: &str,
    baseline: &[ProfileFunction],
    variant: &[ProfileFunction],
) -> String {
    let merged = union_merge(&percent_map(baseline), &percent_map(variant), 0.0);

    let mut rows: Vec<(&String, &(f64, f64))> = merged.iter().collect();
    rows.sort_by(|a, b| {
        b.1 .0
            .partial_cmp(&a.1 .0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out = profile_section_header(tool);
    let _ = writeln!(
        out,
        "{:<50} {:<10} {:<10} {:<10}",
        "Function", "No Turbo", "Turbo", "Change"
    );
    let _ = writeln!(out, "{}", "-".repeat(80));

    for (name, (base_pct, turbo_pct)) in rows.into_iter().take(PROFILE_TOP_K) {
        let change = turbo_pct - base_pct;
        let _ = writeln!(
            out,
            "{:<50} {:<10} {:<10} {:+.1}%",
            truncate_name(name, NAME_DISPLAY_MAX),
            format!("{:.2}%", base_pct),
            format!("{:.2}%", turbo_pct),
            change
        );
    }

    out
}

/// List turbo-marker functions among the variant's top consumers, or state
/// explicitly that none were found.
pub fn render_turbo_specific(variant: &[ProfileFunction]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nTurbo Mode Specific Functions:");
    let _ = writeln!(out, "{}", "-".repeat(60));

    let mut found = false;
    for func in variant {
        if is_turbo_marked(&func.name) {
            let _ = writeln!(out, "{:<50} {:.2}%", func.name, func.flat_percent);
            found = true;
        }
    }
    if !found {
        let _ = writeln!(
            out,
            "No turbo-specific functions found in top {} CPU consumers",
            PROFILE_TOP_N
        );
    }

    out
}

/// One-line duration/samples summary, or `None` when neither stat was
/// extracted.
pub fn render_stats_line(label: &str, stats: &ProfileStats) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(duration) = stats.duration_secs {
        parts.push(format!("duration {:.2}s", duration));
    }
    if let Some(samples) = stats.samples {
        parts.push(format!("{} samples", samples));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("{}: {}", label, parts.join(", ")))
    }
}

/// Benchmark tables grouped per command, followed by the aggregate summary.
///
/// `matched` is the inner join of the two parsed logs. Groups and rows are
/// sorted lexicographically. Every row's improvement is sign-normalized so
/// positive always means turbo is better.
pub fn render_benchmark_comparison(
    matched: &HashMap<String, (BenchmarkRecord, BenchmarkRecord)>,
) -> String {
    let mut by_command: BTreeMap<&str, Vec<&String>> = BTreeMap::new();
    for key in matched.keys() {
        by_command.entry(command_of(key)).or_default().push(key);
    }

    let mut out = String::new();
    for (command, mut keys) in by_command {
        keys.sort();

        let _ = writeln!(out, "\n{} Benchmarks:", command);
        let _ = writeln!(out, "{}", "-".repeat(60));
        let _ = writeln!(
            out,
            "{:<40} {:<15} {:<12} {:<12} {:<12}",
            "Test", "Metric", "No Turbo", "Turbo", "Improvement"
        );
        let _ = writeln!(out, "{}", "-".repeat(60));

        for key in keys {
            let (base, turbo) = &matched[key];
            render_benchmark_rows(&mut out, test_name_of(key), base, turbo);
        }
    }

    out.push_str(&render_benchmark_summary(matched));
    out
}

fn render_benchmark_rows(out: &mut String, test: &str, base: &BenchmarkRecord, turbo: &BenchmarkRecord) {
    let time_imp = signed_improvement(MetricKind::Cost, base.ns_per_op, turbo.ns_per_op);
    let _ = writeln!(
        out,
        "{:<40} {:<15} {:<12.0} {:<12.0} {:>10.1}%",
        test, "Time (ns/op)", base.ns_per_op, turbo.ns_per_op, time_imp
    );

    let mb_imp = signed_improvement(MetricKind::Rate, base.mb_per_sec, turbo.mb_per_sec);
    let _ = writeln!(
        out,
        "{:<40} {:<15} {:<12.2} {:<12.2} {:>10.1}%",
        "", "MB/sec", base.mb_per_sec, turbo.mb_per_sec, mb_imp
    );

    if let (Some(base_lps), Some(turbo_lps)) = (base.lines_per_sec, turbo.lines_per_sec) {
        let imp = signed_improvement(MetricKind::Rate, base_lps, turbo_lps);
        let _ = writeln!(
            out,
            "{:<40} {:<15} {:<12.0} {:<12.0} {:>10.1}%",
            "", "Lines/sec", base_lps, turbo_lps, imp
        );
    }

    if let (Some(base_rps), Some(turbo_rps)) = (base.records_per_sec, turbo.records_per_sec) {
        let imp = signed_improvement(MetricKind::Rate, base_rps, turbo_rps);
        let _ = writeln!(
            out,
            "{:<40} {:<15} {:<12.0} {:<12.0} {:>10.1}%",
            "", "Records/sec", base_rps, turbo_rps, imp
        );
    }

    if let (Some(base_hr), Some(turbo_hr)) = (base.hit_rate_percent, turbo.hit_rate_percent) {
        let imp = signed_improvement(MetricKind::Rate, base_hr, turbo_hr);
        let _ = writeln!(
            out,
            "{:<40} {:<15} {:<12.1} {:<12.1} {:>10.1}%",
            "", "Hit rate %", base_hr, turbo_hr, imp
        );
    }

    out.push('\n');
}

/// Mean/best/worst of the time improvements across every matched entry, plus
/// the fixed sign-convention note.
fn render_benchmark_summary(
    matched: &HashMap<String, (BenchmarkRecord, BenchmarkRecord)>,
) -> String {
    let improvements: Vec<f64> = matched
        .values()
        .map(|(base, turbo)| signed_improvement(MetricKind::Cost, base.ns_per_op, turbo.ns_per_op))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "\nSummary:");
    let _ = writeln!(out, "{}", "-".repeat(60));

    if let Some(summary) = ImprovementSummary::from_values(&improvements) {
        let _ = writeln!(out, "Average time improvement: {:.1}%", summary.mean);
        let _ = writeln!(out, "Best improvement: {:.1}%", summary.best);
        let _ = writeln!(out, "Worst improvement: {:.1}%", summary.worst);
    } else {
        let _ = writeln!(out, "No benchmarks present in both result files");
    }

    let _ = writeln!(out, "\nNote: Positive improvements mean turbo mode is faster/better.");
    let _ = writeln!(out, "      Negative improvements mean turbo mode is slower/worse.");
    out
}

/// Fixed interpretive text appended to the profile report.
///
/// Deliberately static: these are operator-facing reading notes for the DTail
/// turbo investigation, not values derived from the compared data.
pub fn render_narrative() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\nBottleneck Analysis");
    let _ = writeln!(out, "{}", "=".repeat(80));
    out.push_str(
        "\nKey Observations:\n\
         1. Syscall overhead: Both modes show high syscall.Syscall6 usage (25-27%)\n\
         \x20  - This is likely from file I/O operations that turbo mode cannot optimize\n\
         2. No turbo-specific functions appear in the CPU profiles\n\
         \x20  - Suggests turbo mode optimizations may not be activating properly\n\
         3. Runtime overhead: selectgo and channel operations still present in turbo mode\n\
         \x20  - Indicates channel-less processing may not be fully engaged\n\
         \nRecommendations:\n\
         1. Verify turbo mode is actually being activated in the test scenarios\n\
         2. Check if the test data size is large enough to show turbo benefits\n\
         3. Consider profiling with larger files where channel overhead is more significant\n\
         4. Investigate why syscall overhead dominates - possibly network or disk I/O bound\n",
    );
    out
}

fn percent_map(functions: &[ProfileFunction]) -> HashMap<String, f64> {
    functions
        .iter()
        .map(|f| (f.name.clone(), f.flat_percent))
        .collect()
}

fn is_turbo_marked(name: &str) -> bool {
    let lower = name.to_lowercase();
    TURBO_MARKERS.iter().any(|marker| lower.contains(marker))
}
