//! Archive extraction
//!
//! Extraction goes through the [`Extractor`] trait so staging logic can be
//! exercised without shelling out. [`UnzipExtractor`] is the production
//! implementation and runs the system `unzip` as a blocking subprocess.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Unpacks an archive into a directory.
pub trait Extractor {
    /// Extract every entry of `archive` into `dest`, overwriting existing files.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()>;
}

impl<E: Extractor + ?Sized> Extractor for &E {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        (**self).extract(archive, dest)
    }
}

impl<E: Extractor + ?Sized> Extractor for Box<E> {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        (**self).extract(archive, dest)
    }
}

/// Runs `unzip -o <archive> -d <dest>` with output captured.
#[derive(Debug, Clone)]
pub struct UnzipExtractor {
    program: PathBuf,
}

impl Default for UnzipExtractor {
    fn default() -> Self {
        Self {
            program: PathBuf::from("unzip"),
        }
    }
}

impl UnzipExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable with `unzip`-compatible arguments.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Extractor for UnzipExtractor {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<()> {
        tracing::debug!(
            program = %self.program.display(),
            archive = %archive.display(),
            dest = %dest.display(),
            "running archive extractor"
        );

        let output = Command::new(&self.program)
            .arg("-o")
            .arg(archive)
            .arg("-d")
            .arg(dest)
            .output()
            .map_err(|e| Error::ExtractionFailed {
                archive: archive.to_path_buf(),
                message: format!("could not run {}: {e}", self.program.display()),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        let detail = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        let code = output.status.code().unwrap_or(-1);

        Err(Error::ExtractionFailed {
            archive: archive.to_path_buf(),
            message: format!("{} exited with code {code}: {detail}", self.program.display()),
        })
    }
}
