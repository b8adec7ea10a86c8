//! Error types for wallet-sdk

use std::path::PathBuf;

/// Result type for SDK staging operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while staging an SDK
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved SDK path does not exist
    #[error("SDK path not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The archive tool could not be run or exited unsuccessfully
    #[error("Failed to extract archive {}: {message}", archive.display())]
    ExtractionFailed { archive: PathBuf, message: String },

    #[error(transparent)]
    Fs(#[from] wallet_fs::Error),
}
