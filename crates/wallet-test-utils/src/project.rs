//! [`TestProject`] builder for native-project test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wallet_fs::NormalizedPath;

/// A temporary app project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use wallet_test_utils::project::TestProject;
///
/// let project = TestProject::new();
/// project.with_groovy_build_file();
/// project.assert_file_exists("android/build.gradle");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The project root as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Absolute path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.path(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        full_path
    }

    /// Create the directory `rel` and its parents.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let full_path = self.path(rel);
        fs::create_dir_all(&full_path).unwrap();
        full_path
    }

    /// Read `rel` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", full_path.display()))
    }

    /// Write the template's Groovy `android/build.gradle`.
    pub fn with_groovy_build_file(&self) -> PathBuf {
        self.write("android/build.gradle", crate::GROOVY_BUILD_GRADLE)
    }

    /// Write a Kotlin `android/build.gradle.kts`.
    pub fn with_kotlin_build_file(&self) -> PathBuf {
        self.write("android/build.gradle.kts", crate::KOTLIN_BUILD_GRADLE)
    }

    /// Sorted names of the entries directly inside `rel`.
    ///
    /// Returns an empty list when the directory does not exist.
    pub fn list_dir(&self, rel: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.path(rel)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
