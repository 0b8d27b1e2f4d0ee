//! End-to-end binary tests: exit codes and report output.

mod common;

use assert_cmd::Command;
use common::load_text;
use tempfile::TempDir;

#[test]
fn profile_report_aborts_when_input_dirs_are_missing() {
    let dir = TempDir::new().unwrap();

    let output = Command::cargo_bin("profile-report")
        .unwrap()
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("profile directories not found"), "stderr: {}", stderr);
    // No partial report.
    assert!(output.stdout.is_empty());
}

#[test]
fn profile_report_skips_tools_without_profiles() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("profiles_comparison/noturbo")).unwrap();
    std::fs::create_dir_all(dir.path().join("profiles_comparison/turbo")).unwrap();

    let output = Command::cargo_bin("profile-report")
        .unwrap()
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DTail Turbo Mode Profile Analysis"));
    for tool in ["dcat", "dgrep", "dmap"] {
        // Each tool still gets its section header ahead of the skip note.
        assert!(
            stdout.contains(&format!("{} CPU Profile Comparison", tool.to_uppercase())),
            "missing section header for {}",
            tool
        );
        assert!(
            stdout.contains(&format!("Could not find CPU profiles for {}", tool)),
            "missing skip note for {}",
            tool
        );
    }
    // The narrative block still closes the report.
    assert!(stdout.contains("Bottleneck Analysis"));
}

#[test]
fn bench_report_aborts_when_a_log_is_missing() {
    let dir = TempDir::new().unwrap();

    let output = Command::cargo_bin("bench-report")
        .unwrap()
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading benchmark_noturbo.txt"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn bench_report_renders_full_comparison() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("benchmark_noturbo.txt"),
        load_text("benchmark_noturbo.txt"),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("benchmark_turbo.txt"),
        load_text("benchmark_turbo.txt"),
    )
    .unwrap();

    let output = Command::cargo_bin("bench-report")
        .unwrap()
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("DTail Turbo Mode Benchmark Comparison"));
    assert!(stdout.contains("cat Benchmarks:"));
    assert!(stdout.contains("Average time improvement: 18.3%"));
}
