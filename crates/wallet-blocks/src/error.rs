//! Error types for wallet-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No generated region tagged '{tag}' found")]
    RegionNotFound { tag: String },
}
