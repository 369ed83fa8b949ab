// File: crates/scooter-lca/src/error.rs
// Summary: Error types for the CSV table layer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    /// The only condition callers are expected to handle.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
