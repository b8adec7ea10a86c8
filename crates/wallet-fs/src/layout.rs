//! Well-known locations inside a generated native project.

use std::path::Path;

use crate::NormalizedPath;

/// Paths the patcher reads or writes, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativePath {
    /// Staging directory for local SDK artifacts (`android/libs`)
    AndroidLibs,
    /// Project-level Gradle build file in Groovy syntax
    GroovyBuildFile,
    /// Project-level Gradle build file in Kotlin syntax
    KotlinBuildFile,
    /// `Info.plist` entries persisted as JSON (`ios/Info.plist.json`)
    IosInfoPlist,
}

impl NativePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AndroidLibs => "android/libs",
            Self::GroovyBuildFile => "android/build.gradle",
            Self::KotlinBuildFile => "android/build.gradle.kts",
            Self::IosInfoPlist => "ios/Info.plist.json",
        }
    }

    /// Resolve this location under a project root.
    pub fn under(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(self.as_str())
    }
}

impl AsRef<Path> for NativePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for NativePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
