//! Failure kinds raised while reducing result matrices.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing summary tables.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("malformed input {}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("input {} has no data rows", path.display())]
    EmptyMatrix { path: PathBuf },

    #[error(
        "input {} has {found} columns but the method table needs {needed}",
        path.display()
    )]
    ColumnMismatch {
        path: PathBuf,
        needed: usize,
        found: usize,
    },

    #[error("expected {expected} observations in total, read {actual}")]
    TotalCountMismatch { expected: usize, actual: usize },

    #[error("invalid method table: {0}")]
    InvalidMethods(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
