//! Extraction of function tables and summary stats from pprof text output.
//!
//! The profiler's output format is not under our control, so both extractors
//! key off small literal markers and skip everything else. No match means an
//! empty result, never an error.

use crate::schema::{ProfileFunction, ProfileStats};

/// Column header that introduces the data rows of a `pprof -top` table.
const TOP_TABLE_MARKER: &str = "flat  flat%";

/// Label preceding the profile duration in `pprof -text` output.
const DURATION_LABEL: &str = "Duration:";

/// Extract function rows from `pprof -top` output, preserving source order.
///
/// Rows start after the line containing [`TOP_TABLE_MARKER`]. Each non-blank
/// row is whitespace-split and must have at least 5 tokens: flat time, flat
/// percent, sum percent, cumulative time, cumulative percent, then the
/// function name, which may itself contain spaces and is rebuilt from every
/// remaining token. Rows with too few tokens or an unparseable percent are
/// skipped. If the marker never appears the result is empty.
pub fn extract_top_functions(output: &str) -> Vec<ProfileFunction> {
    let mut functions = Vec::new();
    let mut in_data = false;

    for line in output.lines() {
        if line.contains(TOP_TABLE_MARKER) {
            in_data = true;
            continue;
        }
        if !in_data || line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 5 {
            continue;
        }
        let Some(flat_percent) = parse_percent(parts[1]) else {
            continue;
        };
        functions.push(ProfileFunction {
            name: parts[4..].join(" "),
            flat_percent,
            flat_time: parts[0].to_string(),
        });
    }

    functions
}

/// Scrape duration and sample count from `pprof -text` output.
///
/// The duration is the float following the `Duration:` label; the sample
/// count is the first integer on any line that mentions `samples` but is not
/// a `Total` line. Each field is independent and optional; when a label
/// matches more than once, the last occurrence wins.
pub fn extract_profile_stats(output: &str) -> ProfileStats {
    let mut stats = ProfileStats::default();

    for line in output.lines() {
        if let Some(rest) = line.split(DURATION_LABEL).nth(1) {
            if let Some(duration) = leading_float(rest.trim_start()) {
                stats.duration_secs = Some(duration);
            }
        } else if line.contains("samples") && !line.contains("Total") {
            if let Some(samples) = first_integer(line) {
                stats.samples = Some(samples);
            }
        }
    }

    stats
}

/// Parse a `NN.NN%` token, tolerating a missing `%` suffix.
fn parse_percent(token: &str) -> Option<f64> {
    token.trim_end_matches('%').parse().ok()
}

/// Parse the longest `[0-9.]` prefix of `s` as a float.
fn leading_float(s: &str) -> Option<f64> {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// First run of ASCII digits anywhere in the line, as an integer.
fn first_integer(line: &str) -> Option<u64> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let rest = &line[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
