//! SHA-256 content fingerprints
//!
//! Generated-block headers carry a fingerprint of the block body so a rerun can
//! tell an up-to-date block from a stale one without parsing it.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 digest of string content.
pub fn content_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
