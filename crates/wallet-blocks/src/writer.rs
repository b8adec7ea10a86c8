//! Merging generated blocks into a document.

use wallet_fs::checksum::content_digest;

use crate::error::{Error, Result};
use crate::parser::{begin_marker, end_marker, locate};

/// Tool name recorded in every header line.
const GENERATOR: &str = "wallet prebuild";

/// A block of machine-authored text and the tag it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    /// Identifies the logical insertion across runs.
    pub tag: String,
    /// Line-comment syntax of the target file, e.g. `//` or `#`.
    pub comment_prefix: String,
    /// The text placed between the markers.
    pub body: String,
}

impl GeneratedBlock {
    pub fn new(
        tag: impl Into<String>,
        comment_prefix: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            comment_prefix: comment_prefix.into(),
            body: body.into(),
        }
    }

    /// The header line, fingerprinting the current body.
    pub fn header_line(&self) -> String {
        format!(
            "{} {} {} (DO NOT MODIFY) sync-{}",
            self.comment_prefix,
            begin_marker(&self.tag),
            GENERATOR,
            content_digest(&self.body)
        )
    }

    /// The footer line. It does not depend on the body.
    pub fn footer_line(&self) -> String {
        format!("{} {}", self.comment_prefix, end_marker(&self.tag))
    }

    /// Header, body and footer joined by newlines.
    pub fn render(&self) -> String {
        [self.header_line(), self.body.clone(), self.footer_line()].join("\n")
    }
}

/// Outcome of [`merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// The updated document.
    pub contents: String,
    /// A stale region with the same tag was removed.
    pub did_clear: bool,
    /// The document changed.
    pub did_merge: bool,
}

/// Where a block stands relative to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStatus {
    /// The exact header is present.
    Current,
    /// A region with the tag exists but carries another body.
    Stale,
    /// No region with the tag exists.
    Missing,
}

/// Drops the region's lines, or returns `None` when no region is tagged `tag`.
fn clear_region(document: &str, tag: &str) -> Option<String> {
    let mut lines: Vec<&str> = document.split('\n').collect();
    let (start, end) = locate(&lines, tag)?;
    lines.drain(start..=end);
    Some(lines.join("\n"))
}

/// Merges `block` into `document`, leaving exactly one region for its tag.
///
/// If the header for the current body is already present the document is
/// returned untouched. Otherwise any earlier region with the same tag is
/// cleared and the block is appended after a newline.
///
/// # Example
/// ```
/// use wallet_blocks::writer::{GeneratedBlock, merge};
///
/// let block = GeneratedBlock::new("libs-repo", "//", "google()");
/// let first = merge("buildscript {}".to_string(), &block);
/// assert!(first.did_merge);
///
/// let second = merge(first.contents.clone(), &block);
/// assert!(!second.did_merge);
/// assert_eq!(second.contents, first.contents);
/// ```
pub fn merge(document: String, block: &GeneratedBlock) -> MergeResult {
    let header = block.header_line();
    if document.contains(&header) {
        tracing::debug!(tag = %block.tag, "generated block up to date");
        return MergeResult {
            contents: document,
            did_clear: false,
            did_merge: false,
        };
    }

    let cleared = clear_region(&document, &block.tag);
    let did_clear = cleared.is_some();
    let base = cleared.unwrap_or(document);

    tracing::debug!(tag = %block.tag, did_clear, "merging generated block");
    MergeResult {
        contents: format!("{}\n{}", base, block.render()),
        did_clear,
        did_merge: true,
    }
}

/// Reports whether `block` is current, stale or missing in `document`.
pub fn block_status(document: &str, block: &GeneratedBlock) -> BlockStatus {
    if document.contains(&block.header_line()) {
        BlockStatus::Current
    } else {
        let lines: Vec<&str> = document.split('\n').collect();
        match locate(&lines, &block.tag) {
            Some(_) => BlockStatus::Stale,
            None => BlockStatus::Missing,
        }
    }
}

/// Removes the region tagged `tag`.
///
/// The newline that separated the region from preceding content goes with it,
/// so removing a freshly merged block restores the original document.
///
/// # Errors
/// Returns `Error::RegionNotFound` if no well-formed region carries the tag.
///
/// # Example
/// ```
/// use wallet_blocks::writer::{GeneratedBlock, merge, remove_region};
///
/// let original = "buildscript {}".to_string();
/// let block = GeneratedBlock::new("libs-repo", "//", "google()");
/// let merged = merge(original.clone(), &block).contents;
///
/// assert_eq!(remove_region(&merged, "libs-repo").unwrap(), original);
/// ```
pub fn remove_region(document: &str, tag: &str) -> Result<String> {
    clear_region(document, tag).ok_or_else(|| Error::RegionNotFound {
        tag: tag.to_string(),
    })
}
