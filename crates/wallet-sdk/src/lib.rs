//! SDK materialization for the wallet native patcher.
//!
//! Makes a third-party SDK's files present in a fixed directory of the native
//! project, whatever shape the distribution arrives in:
//!
//! - a `.zip` archive is handed to an [`Extractor`]
//! - a directory has its top-level files copied (optionally the whole tree)
//! - any other file is copied under its own name
//!
//! Existing files in the destination are never deleted; same-named files are
//! overwritten.

pub mod error;
pub mod extractor;
pub mod materializer;
pub mod source;

pub use error::{Error, Result};
pub use extractor::{Extractor, UnzipExtractor};
pub use materializer::{CopyDepth, DEFAULT_ARTIFACT_NAME, Materialized, Materializer};
pub use source::SdkSource;
