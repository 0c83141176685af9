//! Error types for lintwalklib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file discovery and pattern handling
#[derive(Error, Debug)]
pub enum LintwalkError {
    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to read piped input
    #[error("failed to read stdin: {0}")]
    StdinRead(#[source] std::io::Error),
}
