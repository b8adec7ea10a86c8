//! In-memory native project artifacts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wallet_fs::{ConfigStore, NativePath, NormalizedPath, io};

use crate::error::{Error, Result};

/// Top-level `Info.plist` entries as an ordered key/value mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoPlist(Map<String, Value>);

impl InfoPlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Load a mapping persisted as JSON, TOML or YAML.
    ///
    /// A missing file yields an empty mapping.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        match ConfigStore::new().load(path) {
            Ok(plist) => Ok(plist),
            Err(e) if e.is_not_found() => Ok(Self::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }
}

impl From<Map<String, Value>> for InfoPlist {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Syntax of a Gradle build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildFileLanguage {
    Groovy,
    #[serde(rename = "kt")]
    Kotlin,
}

impl BuildFileLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groovy => "groovy",
            Self::Kotlin => "kt",
        }
    }

    /// Where the project-level build file of this language lives.
    pub fn native_path(&self) -> NativePath {
        match self {
            Self::Groovy => NativePath::GroovyBuildFile,
            Self::Kotlin => NativePath::KotlinBuildFile,
        }
    }

    /// Detect the language from a build file name.
    pub fn from_path(path: &NormalizedPath) -> Option<Self> {
        match path.extension()? {
            "gradle" => Some(Self::Groovy),
            "kts" => Some(Self::Kotlin),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuildFileLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The project-level Android build file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBuildGradle {
    pub language: BuildFileLanguage,
    pub contents: String,
    /// Root of the app project, the parent of `android/`.
    pub project_root: NormalizedPath,
}

impl ProjectBuildGradle {
    pub fn new(
        language: BuildFileLanguage,
        contents: impl Into<String>,
        project_root: NormalizedPath,
    ) -> Self {
        Self {
            language,
            contents: contents.into(),
            project_root,
        }
    }

    /// Read `android/build.gradle`, falling back to `android/build.gradle.kts`.
    pub fn load(project_root: &NormalizedPath) -> Result<Self> {
        for language in [BuildFileLanguage::Groovy, BuildFileLanguage::Kotlin] {
            let path = language.native_path().under(project_root);
            if path.is_file() {
                let contents = io::read_text(&path)?;
                tracing::debug!(path = %path, %language, "loaded project build file");
                return Ok(Self::new(language, contents, project_root.clone()));
            }
        }

        Err(Error::BuildFileNotFound {
            root: project_root.to_native(),
        })
    }

    /// Location of this build file under the project root.
    pub fn path(&self) -> NormalizedPath {
        self.language.native_path().under(&self.project_root)
    }

    /// Write the contents back atomically.
    pub fn save(&self) -> Result<()> {
        Ok(io::write_text(&self.path(), &self.contents)?)
    }
}
