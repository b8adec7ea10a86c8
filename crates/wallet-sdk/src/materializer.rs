//! Staging an SDK distribution into a destination directory.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use wallet_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::extractor::{Extractor, UnzipExtractor};
use crate::source::SdkSource;

/// File name used when a single-file source has no usable name.
pub const DEFAULT_ARTIFACT_NAME: &str = "google-tap-and-pay.aar";

/// How far a directory source is copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyDepth {
    /// Only regular files directly inside the source directory.
    #[default]
    TopLevel,
    /// The whole tree, recreating subdirectories in the destination.
    Recursive,
}

/// Report of a completed materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// The classified source.
    pub source: SdkSource,
    /// The destination directory.
    pub destination: PathBuf,
    /// Files written by copying, in the order they were copied. Empty for
    /// archives, whose entries are written by the extractor.
    pub files: Vec<PathBuf>,
}

/// Stages SDK distributions into a project directory.
///
/// # Example
///
/// ```rust,no_run
/// use wallet_fs::NormalizedPath;
/// use wallet_sdk::Materializer;
///
/// let root = NormalizedPath::new("/work/app");
/// let report = Materializer::new()
///     .materialize(&root, "./libs/tapandpay-v18.3.3.zip", "android/libs")
///     .unwrap();
/// println!("staged {}", report.source);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Materializer<E = UnzipExtractor> {
    extractor: E,
    depth: CopyDepth,
}

impl Materializer<UnzipExtractor> {
    /// A materializer using the system `unzip` and top-level directory copies.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: Extractor> Materializer<E> {
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            extractor,
            depth: CopyDepth::default(),
        }
    }

    /// Set how directory sources are copied.
    pub fn depth(mut self, depth: CopyDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Populate `project_root/libs_relative_dir` from `sdk_path`.
    ///
    /// `sdk_path` is resolved against `project_root` unless absolute, folding
    /// `.` and `..` lexically. The result stays a native path, so backslashes
    /// in file names survive on Unix. The destination is created before the
    /// source is inspected, so it exists even when the source turns out to be
    /// missing.
    ///
    /// A source that already lives in the destination is left as it is, and a
    /// recursive copy never descends into the destination itself.
    ///
    /// # Errors
    /// - `Error::SourceNotFound` if the resolved source does not exist
    /// - `Error::ExtractionFailed` if the extractor fails on an archive
    /// - `Error::Fs` for any other filesystem failure
    pub fn materialize(
        &self,
        project_root: &NormalizedPath,
        sdk_path: &str,
        libs_relative_dir: &str,
    ) -> Result<Materialized> {
        let resolved = resolve_source(project_root, sdk_path);
        let destination = project_root.join(libs_relative_dir).to_native();

        io::ensure_dir(&destination)?;

        let source = SdkSource::classify(&resolved)?;
        tracing::info!(
            source = %source,
            destination = %destination.display(),
            "materializing SDK"
        );

        let files = match &source {
            SdkSource::Archive(archive) => {
                self.extract(archive, &destination)?;
                Vec::new()
            }
            SdkSource::Directory(dir) => {
                let mut files = Vec::new();
                let copy = DirectoryCopy {
                    depth: self.depth,
                    staging_dir: &destination,
                };
                copy.run(dir, &destination, &mut files)?;
                files
            }
            SdkSource::SingleFile(file) => vec![copy_single_file(file, &destination)?],
        };

        tracing::info!(copied = files.len(), kind = source.kind(), "SDK materialized");
        Ok(Materialized {
            source,
            destination,
            files,
        })
    }

    fn extract(&self, archive: &Path, destination: &Path) -> Result<()> {
        self.extractor
            .extract(archive, destination)
            .map_err(|e| match e {
                e @ Error::ExtractionFailed { .. } => e,
                other => Error::ExtractionFailed {
                    archive: archive.to_path_buf(),
                    message: other.to_string(),
                },
            })
    }
}

/// Joins `sdk_path` onto `project_root` and folds `.` and `..` lexically.
fn resolve_source(project_root: &NormalizedPath, sdk_path: &str) -> PathBuf {
    let joined = project_root.to_native().join(sdk_path);
    let mut resolved = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = resolved.components().next_back();
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                let at_name = matches!(last, Some(Component::Normal(_)));
                if at_name {
                    resolved.pop();
                } else if !at_root {
                    // Leading `..` of a relative root is kept; above `/` stays at `/`
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }

    if resolved.as_os_str().is_empty() {
        resolved.push(".");
    }
    resolved
}

/// Copies regular files of a directory source.
struct DirectoryCopy<'a> {
    depth: CopyDepth,
    /// The top-level destination, skipped if it shows up inside the source.
    staging_dir: &'a Path,
}

impl DirectoryCopy<'_> {
    /// Copies regular files from `dir` into `destination`.
    ///
    /// Entries are visited in name order so reports are stable across platforms.
    fn run(&self, dir: &Path, destination: &Path, copied: &mut Vec<PathBuf>) -> Result<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| wallet_fs::Error::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()
            .map_err(|e| wallet_fs::Error::io(dir, e))?;
        entries.sort();

        for entry in entries {
            // Follows symlinks, so a link to a file is copied as that file
            let metadata = fs::metadata(&entry).map_err(|e| wallet_fs::Error::io(&entry, e))?;
            let Some(name) = entry.file_name() else {
                continue;
            };
            let target = destination.join(name);

            if metadata.is_file() {
                io::copy_file(&entry, &target)?;
                copied.push(target);
            } else if metadata.is_dir() && self.depth == CopyDepth::Recursive {
                if io::same_file(&entry, self.staging_dir) {
                    tracing::debug!(entry = %entry.display(), "skipping destination inside source");
                    continue;
                }
                io::ensure_dir(&target)?;
                self.run(&entry, &target, copied)?;
            } else {
                tracing::debug!(entry = %entry.display(), "skipping non-file entry");
            }
        }

        Ok(())
    }
}

/// Name a single-file source is staged under.
fn artifact_name(file: &Path) -> &OsStr {
    file.file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| OsStr::new(DEFAULT_ARTIFACT_NAME))
}

/// Copies `file` into `destination` under its own name.
fn copy_single_file(file: &Path, destination: &Path) -> Result<PathBuf> {
    let target = destination.join(artifact_name(file));
    io::copy_file(file, &target)?;
    Ok(target)
}
