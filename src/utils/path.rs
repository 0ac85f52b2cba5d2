//! Path utilities: expand ~, build per-run output file names.

use chrono::Local;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `<dir>/<prefix>_<YYYYMMDD_HHMMSS>_<pid>.<ext>`, bumped with a counter
/// suffix if such a file already exists.
pub fn unique_output_path(dir: &Path, prefix: &str, ext: &str) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let base = format!("{prefix}_{stamp}_{}", std::process::id());

    let mut candidate = dir.join(format!("{base}.{ext}"));
    let mut n = 1;
    while candidate.exists() {
        candidate = dir.join(format!("{base}_{n}.{ext}"));
        n += 1;
    }
    candidate
}
