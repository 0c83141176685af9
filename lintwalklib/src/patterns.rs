//! Glob-style filename matching for include/exclude rules.
//!
//! Patterns use shell wildcard syntax (`*`, `?`, `[seq]`) via the `glob`
//! crate. Matching is any-of over the pattern set; an empty set defers to
//! a caller-chosen default so the same primitive serves both "include
//! everything" and "exclude nothing" policies.

use glob::Pattern;

use crate::error::LintwalkError;
use crate::Result;

/// Test a filename against a set of glob patterns.
///
/// Returns `default` when `patterns` is empty, otherwise true if any
/// pattern matches. Total over all inputs: a pattern that does not
/// compile matches nothing.
pub fn fnmatch(filename: &str, patterns: &[String], default: bool) -> bool {
    if patterns.is_empty() {
        return default;
    }

    patterns.iter().any(|p| {
        Pattern::new(p)
            .map(|pattern| pattern.matches(filename))
            .unwrap_or(false)
    })
}

/// A pre-compiled set of glob patterns.
///
/// Construction is fallible so that a bad user-supplied pattern surfaces
/// once, up front, rather than silently matching nothing on every call.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile a set of patterns.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| LintwalkError::InvalidGlob {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Whether the set contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Test `name` against the set; `default` applies when the set is
    /// empty, mirroring [`fnmatch`].
    pub fn matches(&self, name: &str, default: bool) -> bool {
        if self.patterns.is_empty() {
            return default;
        }
        self.patterns.iter().any(|pattern| pattern.matches(name))
    }
}
