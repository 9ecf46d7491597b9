//! Error types for loading and grading student records.

use std::path::PathBuf;
use thiserror::Error;

/// Every way a load can fail. All of them abort the whole load.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited structure is malformed (quoting, inconsistent field counts).
    #[error("malformed CSV in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row has fewer fields than a student needs.
    #[error("invalid row: {row:?}")]
    MalformedRow { row: Vec<String> },

    /// A score field is not an integer.
    #[error("invalid score in row: {row:?}")]
    InvalidScore { row: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
