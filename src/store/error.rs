//! Result store error types
//!
//! Defines all errors that can occur while selecting and ingesting
//! scalar-result files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the result store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O operation failed (file could not be opened or read)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The results directory to select files from does not exist
    #[error("Results directory not found: {0:?}")]
    ResultsDirMissing(PathBuf),

    /// `ingest_all` was handed an empty file list
    #[error("No result files to ingest")]
    NoInputFiles,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NoInputFiles;
        assert_eq!(err.to_string(), "No result files to ingest");

        let err = StoreError::ResultsDirMissing(PathBuf::from("simulations/results"));
        assert!(err.to_string().contains("simulations/results"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
