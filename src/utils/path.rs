//! Path utilities: expand ~ and resolve export targets.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve `file` against `base` unless it is already absolute (after ~ expansion).
pub fn resolve_against(base: &str, file: &str) -> PathBuf {
    let f = expand_tilde(file);
    if f.is_absolute() {
        f
    } else {
        expand_tilde(base).join(f)
    }
}

/// Make sure a path carries the extension of the chosen export format.
pub fn with_extension_if_missing(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(ext)
    }
}
