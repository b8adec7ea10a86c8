//! Error types for wallet-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from wallet-plugin
    #[error(transparent)]
    Plugin(#[from] wallet_plugin::Error),

    /// Error from wallet-fs
    #[error(transparent)]
    Fs(#[from] wallet_fs::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
