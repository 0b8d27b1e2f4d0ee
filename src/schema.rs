//! Shared record types for profile and benchmark comparisons.
//!
//! Extractors produce these, the merge/metrics layers consume them, and the
//! reporter renders them. They mirror the textual artifacts one-to-one so a
//! record can always be traced back to a source line.

use serde::{Deserialize, Serialize};

/// One function row from a pprof `-top` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFunction {
    /// Fully qualified function name. May contain spaces and slashes; it is
    /// rebuilt by rejoining every token after the fixed numeric columns.
    pub name: String,
    /// Flat time share attributed directly to the function, in percent.
    pub flat_percent: f64,
    /// Flat time column as printed by pprof (e.g. `0.42s`, `120ms`).
    pub flat_time: String,
}

/// Overall statistics scraped from a pprof `-text` dump.
///
/// Both fields are extracted independently; either can be missing without
/// affecting the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Profile duration in seconds, from the `Duration:` line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Sample count, from the first `samples` line that is not a total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<u64>,
}

/// One parsed benchmark result line.
///
/// Keyed externally by the `type/command/params` identifier. The two
/// mandatory metrics are always present; the trailing metrics exist only when
/// the source line carried the matching unit label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Nanoseconds per operation (lower is better).
    pub ns_per_op: f64,
    /// Throughput in MB per second (higher is better).
    pub mb_per_sec: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hit_rate_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_per_sec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_per_sec: Option<f64>,
}
