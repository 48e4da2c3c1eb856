use std::io;
use thiserror::Error;

/// Error type for bedcons-io operations.
#[derive(Error, Debug)]
pub enum TableWriteError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The finished table could not be moved to its destination.
    #[error("Failed to move table into place at {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for bedcons-io operations.
pub type Result<T> = std::result::Result<T, TableWriteError>;
