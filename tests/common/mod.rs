//! Shared test utilities for loading fixture data.
//!
//! Text fixtures are captured pprof/benchmark output; `bench_cases.json`
//! is a dataset of benchmark-log grammar cases (lines that must parse, with
//! their expected records, and lines that must be rejected).

use std::path::PathBuf;

use serde::Deserialize;
use turbo_compare::schema::BenchmarkRecord;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

pub fn load_text(name: &str) -> String {
    let path = data_dir().join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
}

#[derive(Deserialize)]
pub struct BenchCaseDataset {
    pub accepted: Vec<BenchCase>,
    pub rejected: Vec<String>,
}

#[derive(Deserialize)]
pub struct BenchCase {
    pub line: String,
    pub key: String,
    pub record: BenchmarkRecord,
}

pub fn load_bench_cases() -> BenchCaseDataset {
    let content = load_text("bench_cases.json");
    serde_json::from_str(&content).expect("failed to parse bench_cases.json")
}
