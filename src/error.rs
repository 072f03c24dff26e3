// ⚠️ Error types for the menu core
// Loader failures are fatal at startup, NoCandidates is an expected outcome

use std::path::PathBuf;
use thiserror::Error;

/// LoadError - Anything that stops the menu table from loading
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open menu file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed menu file: {0}")]
    Csv(#[from] csv::Error),

    /// `line` is the 1-based line in the source file (header is line 1)
    #[error("invalid id {value:?} on line {line}")]
    InvalidId { line: u64, value: String },
}

/// NoCandidates - The candidate set was empty, nothing to pick from
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no candidates")]
pub struct NoCandidates;
