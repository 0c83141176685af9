//! One-shot piped-input sourcing.
//!
//! A lint run may take its input from a pipe instead of the filesystem,
//! signalled by the literal path token `-`. Piped input can only be
//! consumed once per process, so `StdinSource` fills an explicit cache
//! on first read and serves the cached value thereafter. The cache is a
//! value passed to whoever needs it, not ambient global state.

use std::io::{self, Read};

use crate::error::LintwalkError;
use crate::Result;

/// The reserved path token meaning "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// True if any element of `paths` is the stdin marker `-`.
pub fn is_using_stdin(paths: &[String]) -> bool {
    paths.iter().any(|p| p == STDIN_MARKER)
}

/// A one-time-fill cache over process stdin.
#[derive(Debug, Default)]
pub struct StdinSource {
    cached: Option<String>,
}

impl StdinSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the piped input, reading stdin on the first call only.
    pub fn read(&mut self) -> Result<&str> {
        self.fill_from(io::stdin().lock())
    }

    /// Like [`read`](Self::read), but filling from an arbitrary reader.
    /// The reader is ignored once the cache is filled.
    pub fn fill_from<R: Read>(&mut self, mut input: R) -> Result<&str> {
        match self.cached {
            Some(ref value) => Ok(value),
            None => {
                let mut buf = String::new();
                input
                    .read_to_string(&mut buf)
                    .map_err(LintwalkError::StdinRead)?;
                Ok(self.cached.insert(buf))
            }
        }
    }
}
