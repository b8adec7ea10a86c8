//! Generated block merging for native build files.
//!
//! A generated block is a machine-authored region appended to an otherwise
//! human-authored file. It is delimited by comment lines so the target
//! toolchain ignores the markers:
//!
//! ```text
//! // @generated begin <tag> - wallet prebuild (DO NOT MODIFY) sync-<sha256 of body>
//! <body>
//! // @generated end <tag>
//! ```
//!
//! The header carries a fingerprint of the body. Merging a block whose header
//! is already present is a no-op; merging a changed body first clears the stale
//! region with the same tag, so a document never holds more than one region per
//! tag.
//!
//! Only a well-formed pair (a header followed by its footer) counts as a
//! region. A lone header or footer is left alone and a fresh region is
//! appended.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{Region, find_region, has_region, parse_regions};
pub use writer::{BlockStatus, GeneratedBlock, MergeResult, block_status, merge, remove_region};
