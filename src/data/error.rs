//! Data loading errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for its envelope.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No resource is served at this request path.
    #[error("unknown path: {0}")]
    UnknownPath(String),

    /// The capability tree nests deeper than the configured limit.
    #[error("capability tree in {} is {depth} levels deep (limit {limit})", path.display())]
    TooDeep {
        path: PathBuf,
        depth: usize,
        limit: usize,
    },
}

/// Result type for data loading.
pub type LoadResult<T> = Result<T, LoadError>;
