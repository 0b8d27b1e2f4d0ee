//! CPU profile comparison report.
//!
//! Compares turbo vs non-turbo CPU profiles for each DTail tool and prints a
//! per-function differential table plus interpretive notes.
//!
//! Takes no arguments: profiles are expected under
//! `profiles_comparison/noturbo` and `profiles_comparison/turbo`, one
//! `<tool>_cpu_*.prof` file per tool. Exits 1 if either directory is missing;
//! a tool whose profiles cannot be found or read is skipped with a note.

use std::path::Path;
use std::process;

use turbo_compare::profile::{extract_profile_stats, extract_top_functions};
use turbo_compare::schema::ProfileFunction;
use turbo_compare::{locate, pprof, report};

const NOTURBO_DIR: &str = "profiles_comparison/noturbo";
const TURBO_DIR: &str = "profiles_comparison/turbo";

/// Tools that produce CPU profiles in the comparison runs.
const TOOLS: &[&str] = &["dcat", "dgrep", "dmap"];

fn main() {
    let noturbo_dir = Path::new(NOTURBO_DIR);
    let turbo_dir = Path::new(TURBO_DIR);
    if !noturbo_dir.exists() || !turbo_dir.exists() {
        eprintln!(
            "Error: profile directories not found ({} and {})",
            NOTURBO_DIR, TURBO_DIR
        );
        process::exit(1);
    }

    print!("{}", report::profile_report_title());

    for tool in TOOLS {
        let noturbo_cpu = find_profile(noturbo_dir, tool);
        let turbo_cpu = find_profile(turbo_dir, tool);

        let (Some(noturbo_cpu), Some(turbo_cpu)) = (noturbo_cpu, turbo_cpu) else {
            print!("{}", report::profile_section_header(tool));
            println!("Could not find CPU profiles for {}", tool);
            continue;
        };

        let noturbo_funcs = top_functions(&noturbo_cpu, report::PROFILE_TOP_N);
        let turbo_funcs = top_functions(&turbo_cpu, report::PROFILE_TOP_N);

        print!("{}", report::render_profile_comparison(tool, &noturbo_funcs, &turbo_funcs));

        for (label, path) in [("No Turbo", &noturbo_cpu), ("Turbo", &turbo_cpu)] {
            if let Some(text) = pprof::text_output(path) {
                let stats = extract_profile_stats(&text);
                if let Some(line) = report::render_stats_line(label, &stats) {
                    println!("{}", line);
                }
            }
        }

        print!("{}", report::render_turbo_specific(&turbo_funcs));
    }

    print!("{}", report::render_narrative());
}

fn find_profile(dir: &Path, tool: &str) -> Option<std::path::PathBuf> {
    match locate::find_cpu_profile(dir, tool) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error reading {}: {}", dir.display(), e);
            None
        }
    }
}

fn top_functions(profile: &Path, n: usize) -> Vec<ProfileFunction> {
    match pprof::top_output(profile, n) {
        Some(output) => extract_top_functions(&output),
        None => Vec::new(),
    }
}
