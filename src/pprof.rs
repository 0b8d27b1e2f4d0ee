//! Invocation of `go tool pprof` as an opaque external collaborator.
//!
//! The call blocks until the tool exits. A spawn failure or non-zero exit is
//! reported to stderr and surfaces as `None`, so the caller can skip that one
//! metric and keep going.

use std::path::Path;
use std::process::Command;

/// Run `go tool pprof <args...> <profile>` and return its stdout.
pub fn run_pprof(profile: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("go")
        .arg("tool")
        .arg("pprof")
        .args(args)
        .arg(profile)
        .output();

    match output {
        Ok(out) if out.status.success() => {
            Some(String::from_utf8_lossy(&out.stdout).into_owned())
        }
        Ok(out) => {
            eprintln!(
                "Error running pprof on {}: exit status {}",
                profile.display(),
                out.status
            );
            None
        }
        Err(e) => {
            eprintln!("Error running pprof on {}: {}", profile.display(), e);
            None
        }
    }
}

/// `-top` table output limited to the `n` heaviest functions.
pub fn top_output(profile: &Path, n: usize) -> Option<String> {
    let nodecount = format!("-nodecount={}", n);
    run_pprof(profile, &["-top", &nodecount])
}

/// `-text` dump used for the duration/samples summary.
pub fn text_output(profile: &Path) -> Option<String> {
    run_pprof(profile, &["-text", "-seconds=1"])
}
