//! Differential performance reports for DTail turbo mode.
//!
//! Two pipelines share the same shape: extract records from semi-structured
//! text (pprof tables or Go benchmark logs), align the baseline and turbo
//! datasets, compute improvement percentages, and render a textual report.
//!
//! Parsing is deliberately lenient: lines that do not match the expected
//! grammar are skipped, and a missing header marker yields an empty result
//! rather than an error. Only a missing input file or directory aborts a run,
//! and that policy lives in the binaries, not here.

pub mod bench;
pub mod locate;
pub mod merge;
pub mod metrics;
pub mod pprof;
pub mod profile;
pub mod report;
pub mod schema;
