use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by storage and report operations
///
/// Not-found conditions are deliberately absent: deleting or updating a
/// title that isn't in the collection is a no-op, not a failure.
#[derive(Error, Debug)]
pub enum PoetryError {
    /// Reading or writing a file failed
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file exists but is not a JSON array of poems
    #[error("Failed to parse poem collection from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PoetryError>;
