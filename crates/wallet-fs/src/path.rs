//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A lexically cleaned path using forward slashes internally.
///
/// Backslashes become forward slashes, empty and `.` components are dropped and
/// `..` is folded into its parent where one exists. Nothing touches the
/// filesystem, so a path that does not exist yet still normalizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

/// Split a leading Windows drive (`C:`) off a slash-normalized path.
fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        path.split_at(2)
    } else {
        ("", path)
    }
}

fn clean(raw: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let (drive, rest) = split_drive(&slashed);
    let absolute = rest.starts_with('/');

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                // `..` above the root stays at the root
                _ if absolute => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let body = parts.join("/");
    if absolute {
        format!("{drive}/{body}")
    } else if body.is_empty() {
        if drive.is_empty() {
            ".".to_string()
        } else {
            drive.to_string()
        }
    } else {
        format!("{drive}{body}")
    }
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Lossy: non-UTF-8 bytes are replaced and every `\` becomes `/`, so a Unix
    /// file name containing a backslash does not survive. Keep a `PathBuf` for
    /// paths that must reach the filesystem unchanged.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&path_str),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path starts at a filesystem root (`/` or `C:/`).
    pub fn is_absolute(&self) -> bool {
        split_drive(&self.inner).1.starts_with('/')
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        Self {
            inner: clean(&format!("{}/{}", self.inner, segment)),
        }
    }

    /// Resolve `target` against this path.
    ///
    /// Absolute targets are returned as-is (normalized); relative targets are
    /// joined onto `self`.
    pub fn resolve(&self, target: impl AsRef<Path>) -> Self {
        let target = Self::new(target);
        if target.is_absolute() {
            target
        } else {
            self.join(target.as_str())
        }
    }

    /// Resolve symlinks and relative components against the current directory.
    ///
    /// Uses `dunce` so Windows paths do not come back in `\\?\` form.
    pub fn canonicalize(&self) -> Result<Self> {
        let native = self.to_native();
        dunce::canonicalize(&native)
            .map(Self::new)
            .map_err(|e| Error::io(native, e))
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(idx) if idx + 1 == self.inner.len() => None,
            // Parent is a root: keep its trailing slash
            Some(idx) if idx == split_drive(&self.inner).0.len() => Some(Self {
                inner: self.inner[..=idx].to_string(),
            }),
            Some(idx) => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Get the file name component.
    ///
    /// Roots and `..` have no file name.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty() && *name != "." && *name != "..")
            .filter(|name| split_drive(name).0.is_empty() || name.len() > 2)
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_dot_and_empty_components() {
        assert_eq!(clean("./a//b/./c"), "a/b/c");
    }

    #[test]
    fn clean_folds_parent_components() {
        assert_eq!(clean("/work/app/../libs/sdk.zip"), "/work/libs/sdk.zip");
        assert_eq!(clean("../sdk"), "../sdk");
        assert_eq!(clean("a/../../b"), "../b");
    }

    #[test]
    fn clean_never_climbs_above_root() {
        assert_eq!(clean("/../../etc"), "/etc");
    }

    #[test]
    fn clean_keeps_windows_drive() {
        assert_eq!(clean("C:\\Users\\dev\\..\\sdk"), "C:/Users/sdk");
    }

    #[test]
    fn empty_path_is_current_dir() {
        assert_eq!(clean(""), ".");
    }
}
