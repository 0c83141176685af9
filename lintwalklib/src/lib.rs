//! # lintwalklib
//!
//! Support utilities for a source-code linting front end: normalizing
//! user-supplied path and list arguments, discovering candidate files
//! under directories while honoring exclusion rules, reading piped input
//! exactly once, and classifying low-level lexical tokens.
//!
//! ## Overview
//!
//! The center of the crate is the discovery walker. A caller builds an
//! exclusion predicate (typically backed by [`fnmatch`] over configured
//! ignore lists, with candidates canonicalized via [`normalize_path`])
//! and hands it to [`walk_files`] for each path argument. The walker
//! yields candidate paths lazily, pruning excluded directories from the
//! traversal before they are ever opened — a `.git` or build-output tree
//! costs one name check, not a full descent.
//!
//! Files are tested against the predicate twice, as a bare filename and
//! as a joined path; directories only by bare name. Exclusion rules come
//! in both shapes (extension patterns vs. path prefixes) and directory
//! rules are name-based, so the asymmetry is deliberate.
//!
//! ## Example
//!
//! ```rust
//! use lintwalklib::{fnmatch, normalize_path, walk_files};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("keep.py"), "x = 1\n").unwrap();
//! fs::create_dir(dir.path().join(".git")).unwrap();
//! fs::write(dir.path().join(".git/config"), "").unwrap();
//!
//! let files: Vec<_> = walk_files(dir.path(), |name| name == ".git").collect();
//! assert_eq!(files.len(), 1);
//! assert!(files[0].ends_with("keep.py"));
//!
//! assert!(fnmatch("keep.py", &["*.py".to_string()], false));
//! assert_eq!(normalize_path("keep.py", dir.path()), "keep.py");
//! ```

pub mod discovery;
pub mod error;
pub mod paths;
pub mod patterns;
pub mod plugins;
pub mod stdin;
pub mod tokens;

pub use discovery::{walk_all, walk_files, ExclusionPredicate, FileEnumerator};
pub use error::LintwalkError;
pub use paths::{
    is_windows, normalize_path, normalize_path_cwd, normalize_path_slice, normalize_paths,
    parse_comma_separated_list,
};
pub use patterns::{fnmatch, PatternSet};
pub use plugins::{parameters_for, CheckerPlugin};
pub use stdin::{is_using_stdin, StdinSource, STDIN_MARKER};
pub use tokens::{is_eol_token, is_multiline_string, Token, TokenKind};

/// Result type for lintwalklib operations
pub type Result<T> = std::result::Result<T, LintwalkError>;
