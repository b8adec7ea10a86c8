//! Classification of an SDK source path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions treated as compressed archives, compared case-insensitively.
const ARCHIVE_EXTENSIONS: &[&str] = &["zip"];

/// The on-disk shape of an SDK distribution.
///
/// Resolved once from a single `stat`, so later steps act on the shape that was
/// observed rather than re-inspecting the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkSource {
    Archive(PathBuf),
    Directory(PathBuf),
    SingleFile(PathBuf),
}

fn has_archive_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

impl SdkSource {
    /// Classify an existing path.
    ///
    /// The archive extension wins over the filesystem type, so a directory named
    /// `sdk.zip` is still treated as an archive.
    ///
    /// # Errors
    /// Returns `Error::SourceNotFound` when nothing exists at `path`.
    pub fn classify(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::SourceNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                wallet_fs::Error::io(path, e).into()
            }
        })?;

        let path = path.to_path_buf();
        Ok(if has_archive_extension(&path) {
            Self::Archive(path)
        } else if metadata.is_dir() {
            Self::Directory(path)
        } else {
            Self::SingleFile(path)
        })
    }

    /// The classified path.
    pub fn path(&self) -> &Path {
        match self {
            Self::Archive(path) | Self::Directory(path) | Self::SingleFile(path) => path,
        }
    }

    /// Short name of the variant for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Archive(_) => "archive",
            Self::Directory(_) => "directory",
            Self::SingleFile(_) => "file",
        }
    }
}

impl std::fmt::Display for SdkSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.path().display())
    }
}
