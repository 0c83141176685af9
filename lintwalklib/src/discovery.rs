//! Candidate-file discovery with exclusion-aware directory pruning.
//!
//! The walker enumerates files under a root lazily, consulting a
//! caller-supplied exclusion predicate for every candidate. Files are
//! tested twice, once with the bare filename and once with the joined
//! path, because exclusion rules may be written against either shape
//! (an extension pattern vs. a path-prefix pattern). Directories are
//! tested with the bare name only; an excluded directory is pruned from
//! the traversal before it is ever opened or listed, so whole subtrees
//! (version-control metadata, build output) cost nothing to skip.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// The exclusion test applied to candidate names and paths.
///
/// Returning `true` excludes the candidate. Called once per subdirectory
/// (bare name) and up to twice per file (bare name, then joined path).
pub trait ExclusionPredicate: FnMut(&str) -> bool {}

impl<F: FnMut(&str) -> bool> ExclusionPredicate for F {}

/// Default predicate: nothing excluded.
fn exclude_nothing(_candidate: &str) -> bool {
    false
}

enum State<P> {
    /// Root was not a directory; yield it once, unfiltered.
    Single(Option<PathBuf>),
    Walk { walker: walkdir::IntoIter, predicate: P },
}

/// Lazy iterator over the files a lint run would visit.
///
/// Created by [`walk_files`] or [`walk_all`]. Each instance owns a fresh
/// traversal; partial consumption does no more filesystem work than the
/// consumed prefix required. Unreadable entries are skipped silently.
pub struct FileEnumerator<P> {
    state: State<P>,
}

impl<P: ExclusionPredicate> Iterator for FileEnumerator<P> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match &mut self.state {
            State::Single(slot) => slot.take(),
            State::Walk { walker, predicate } => loop {
                let entry = match walker.next()? {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };

                if entry.file_type().is_dir() {
                    // The root itself is never filtered; only
                    // subdirectories are candidates for pruning.
                    if entry.depth() > 0 && predicate(&entry.file_name().to_string_lossy()) {
                        walker.skip_current_dir();
                    }
                    continue;
                }

                let name = entry.file_name().to_string_lossy();
                if predicate(&name) {
                    continue;
                }
                let joined = entry.path().to_string_lossy();
                if predicate(&joined) {
                    continue;
                }

                return Some(entry.into_path());
            },
        }
    }
}

/// Enumerate files under `root`, skipping candidates the predicate
/// excludes.
///
/// A root that is not a directory (a single file, or a path that does
/// not exist) is yielded as-is exactly once; the predicate is not
/// consulted for it. A directory root is walked top-down in filesystem
/// listing order, parent entries before children.
pub fn walk_files<P>(root: impl AsRef<Path>, predicate: P) -> FileEnumerator<P>
where
    P: ExclusionPredicate,
{
    let root = root.as_ref();
    let state = if root.is_dir() {
        State::Walk {
            walker: WalkDir::new(root).into_iter(),
            predicate,
        }
    } else {
        State::Single(Some(root.to_path_buf()))
    };

    FileEnumerator { state }
}

/// Enumerate every file under `root` with nothing excluded.
pub fn walk_all(root: impl AsRef<Path>) -> FileEnumerator<fn(&str) -> bool> {
    walk_files(root, exclude_nothing as fn(&str) -> bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn create_tree(dir: &Path) {
        fs::create_dir_all(dir.join("skip_dir")).unwrap();
        fs::create_dir_all(dir.join("keep_dir")).unwrap();
        fs::create_dir_all(dir.join("nested")).unwrap();

        fs::write(dir.join("keep.py"), "x = 1\n").unwrap();
        fs::write(dir.join("skip_dir/inner.py"), "x = 2\n").unwrap();
        fs::write(dir.join("keep_dir/x.py"), "x = 3\n").unwrap();
        fs::write(dir.join("nested/ignored.py"), "x = 4\n").unwrap();
    }

    #[test]
    fn test_walk_all_yields_everything() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let files: Vec<_> = walk_all(temp.path()).collect();

        assert_eq!(files.len(), 4);
        assert!(files.iter().any(|p| p.ends_with("keep.py")));
        assert!(files.iter().any(|p| p.ends_with("skip_dir/inner.py")));
        assert!(files.iter().any(|p| p.ends_with("keep_dir/x.py")));
        assert!(files.iter().any(|p| p.ends_with("nested/ignored.py")));
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let files: Vec<_> = walk_files(temp.path(), |name| name == "skip_dir").collect();

        assert!(files.iter().any(|p| p.ends_with("keep.py")));
        assert!(files.iter().any(|p| p.ends_with("keep_dir/x.py")));
        assert!(!files.iter().any(|p| p.ends_with("skip_dir/inner.py")));
    }

    #[test]
    fn test_pruned_directory_never_descended() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let mut calls: HashMap<String, usize> = HashMap::new();
        let files: Vec<_> = walk_files(temp.path(), |candidate| {
            *calls.entry(candidate.to_string()).or_default() += 1;
            candidate == "skip_dir"
        })
        .collect();

        // Queried exactly once, as a directory-name check, then pruned.
        assert_eq!(calls.get("skip_dir"), Some(&1));
        // Its contents were never even considered.
        assert!(!calls.keys().any(|c| c.contains("inner.py")));
        assert!(!files.iter().any(|p| p.ends_with("inner.py")));
    }

    #[test]
    fn test_bare_name_exclusion_applies_at_any_depth() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let files: Vec<_> = walk_files(temp.path(), |name| name == "ignored.py").collect();

        assert!(!files.iter().any(|p| p.ends_with("nested/ignored.py")));
        assert!(files.iter().any(|p| p.ends_with("keep.py")));
    }

    #[test]
    fn test_joined_path_shape_is_also_checked() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let marker = temp.path().join("keep_dir/x.py");
        let marker = marker.to_string_lossy().into_owned();
        let files: Vec<_> = walk_files(temp.path(), move |candidate| candidate == marker).collect();

        assert!(!files.iter().any(|p| p.ends_with("keep_dir/x.py")));
        assert!(files.iter().any(|p| p.ends_with("keep.py")));
    }

    #[test]
    fn test_single_file_root_bypasses_predicate() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("single_file.py");
        fs::write(&file_path, "x = 1\n").unwrap();

        let mut consulted = false;
        let files: Vec<_> = walk_files(&file_path, |_| {
            consulted = true;
            true
        })
        .collect();

        assert_eq!(files, vec![file_path]);
        assert!(!consulted);
    }

    #[test]
    fn test_nonexistent_root_yielded_as_is() {
        let files: Vec<_> = walk_all("no/such/path.py").collect();
        assert_eq!(files, vec![PathBuf::from("no/such/path.py")]);
    }

    #[test]
    fn test_partial_consumption_does_incremental_work() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let calls = std::cell::Cell::new(0usize);
        let mut iter = walk_files(temp.path(), |_| {
            calls.set(calls.get() + 1);
            false
        });

        assert!(iter.next().is_some());
        let after_first = calls.get();
        let rest: Vec<_> = iter.collect();

        // Four files (two checks each) and three subdirectories.
        assert_eq!(rest.len(), 3);
        assert_eq!(calls.get(), 11);
        assert!(after_first < 11, "first yield should not exhaust the tree");
    }

    #[test]
    fn test_each_call_is_a_fresh_traversal() {
        let temp = tempdir().unwrap();
        create_tree(temp.path());

        let first: Vec<_> = walk_all(temp.path()).collect();
        fs::write(temp.path().join("late.py"), "x = 5\n").unwrap();
        let second: Vec<_> = walk_all(temp.path()).collect();

        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 5);
    }
}
