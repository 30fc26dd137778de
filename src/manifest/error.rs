use std::{io, path::PathBuf};
use thiserror::Error;

/// Represents an error that occurred while listing the source directory.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// An unexpected I/O error occurred
    #[error("I/O error: {message} `{}`:\n{error}", .path.display())]
    Io {
        /// Desciption of the failed I/O operation
        message: &'static str,
        /// The directory or entry the operation was applied to
        path: PathBuf,
        /// The I/O error that occured
        error: io::Error,
    },
}

/// Represents an error that occurred while writing the manifest file.
#[derive(Debug, Error)]
pub enum WriteManifestError {
    /// The output file could not be written, e.g. because its directory does not exist
    #[error("Failed to write manifest to `{}`: {error}", .path.display())]
    Io {
        /// The output file
        path: PathBuf,
        /// The I/O error that occured
        error: io::Error,
    },
}
