//! Improvement math over aligned baseline/variant pairs.

/// Relative improvement of `variant` over `baseline`, in percent.
///
/// Positive means the variant shrank the value. A zero baseline yields 0
/// rather than a division fault; a vanished metric is not an improvement we
/// can quantify.
pub fn improvement_percent(baseline: f64, variant: f64) -> f64 {
    if baseline == 0.0 {
        return 0.0;
    }
    ((baseline - variant) / baseline) * 100.0
}

/// Whether a raw metric is a cost (lower is better) or a rate (higher is
/// better). Determines which operand order makes a positive result mean
/// "variant is better".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// e.g. ns/op.
    Cost,
    /// e.g. MB/sec, lines/sec, records/sec.
    Rate,
}

/// Improvement with the sign normalized per metric kind: positive always
/// means the variant is better, regardless of whether the raw metric is a
/// cost or a rate.
pub fn signed_improvement(kind: MetricKind, baseline: f64, variant: f64) -> f64 {
    match kind {
        MetricKind::Cost => improvement_percent(baseline, variant),
        MetricKind::Rate => improvement_percent(variant, baseline),
    }
}

/// Aggregate view over every compared entry (not just the displayed rows).
#[derive(Debug, Clone, PartialEq)]
pub struct ImprovementSummary {
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
}

impl ImprovementSummary {
    /// Summarize a set of improvement percentages; `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let best = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let worst = values.iter().cloned().fold(f64::INFINITY, f64::min);
        Some(Self { mean, best, worst })
    }
}
