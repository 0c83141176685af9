//! Path and list-argument normalization.
//!
//! Lint configuration reaches us in two shapes: comma-separated strings
//! (config files, CLI flags) and already-split sequences. Both are parsed
//! into trimmed element lists, and path elements are canonicalized to an
//! absolute, separator-trimmed form when they reference a location outside
//! the immediate working context.

use std::path::{Path, MAIN_SEPARATOR};

/// Parse a comma-separated list into trimmed elements.
///
/// Empty input yields an empty list. A value with no commas yields a
/// single trimmed element.
pub fn parse_comma_separated_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }

    value.split(',').map(|item| item.trim().to_string()).collect()
}

/// Normalize a single path relative to `parent`.
///
/// A path containing a directory separator is replaced with the absolute
/// form of `parent.join(path)`; a bare filename is returned unchanged
/// (it is assumed resolvable relative to the working context). Trailing
/// separators are stripped either way.
///
/// This function is total and idempotent: an already-normalized path
/// comes back unmodified.
pub fn normalize_path(path: &str, parent: &Path) -> String {
    let mut normalized = if path.contains('/') || path.contains(MAIN_SEPARATOR) {
        let joined = parent.join(path);
        std::path::absolute(&joined)
            .unwrap_or(joined)
            .to_string_lossy()
            .into_owned()
    } else {
        path.to_string()
    };

    while normalized.ends_with('/') || normalized.ends_with(MAIN_SEPARATOR) {
        normalized.pop();
    }
    normalized
}

/// Normalize a path relative to the current working directory.
pub fn normalize_path_cwd(path: &str) -> String {
    normalize_path(path, Path::new("."))
}

/// Parse a comma-separated list of paths and normalize each one,
/// preserving order.
pub fn normalize_paths(paths: &str, parent: &Path) -> Vec<String> {
    parse_comma_separated_list(paths)
        .iter()
        .map(|p| normalize_path(p, parent))
        .collect()
}

/// Normalize an already-split sequence of paths, trimming surrounding
/// whitespace from each element first.
pub fn normalize_path_slice(paths: &[String], parent: &Path) -> Vec<String> {
    paths
        .iter()
        .map(|p| normalize_path(p.trim(), parent))
        .collect()
}

/// Whether we are running on Windows.
///
/// Callers use this to pick separator policy when rendering paths back
/// to the user.
pub fn is_windows() -> bool {
    cfg!(windows)
}
