//! Filesystem primitives for the wallet native patcher
//!
//! Provides normalized path handling, atomic writes, content fingerprints and
//! format-agnostic config loading shared by the patcher crates.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use layout::NativePath;
pub use path::NormalizedPath;
