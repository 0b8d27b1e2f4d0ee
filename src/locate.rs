//! Discovery of CPU profile files by naming convention.

use std::io;
use std::path::{Path, PathBuf};

const PROFILE_SUFFIX: &str = ".prof";

/// Find the CPU profile for `tool` in `dir`: a file named
/// `<tool>_cpu_*.prof`.
///
/// When several files match, the lexicographically smallest filename wins, so
/// repeated runs pick the same profile regardless of directory enumeration
/// order. Returns `Ok(None)` when nothing matches.
pub fn find_cpu_profile(dir: &Path, tool: &str) -> io::Result<Option<PathBuf>> {
    let prefix = format!("{}_cpu_", tool);
    let mut best: Option<PathBuf> = None;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.starts_with(&prefix) || !name.ends_with(PROFILE_SUFFIX) {
            continue;
        }
        let path = entry.path();
        match &best {
            Some(current) if current.file_name() <= path.file_name() => {}
            _ => best = Some(path),
        }
    }

    Ok(best)
}
