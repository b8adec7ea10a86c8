//! Android SDK staging and Maven repository patch.

use std::path::PathBuf;

use wallet_blocks::{GeneratedBlock, merge};
use wallet_fs::NativePath;
use wallet_sdk::{Extractor, Materialized, Materializer, UnzipExtractor};

use crate::artifact::{BuildFileLanguage, ProjectBuildGradle};
use crate::config::WalletProps;
use crate::error::{Error, Result};
use crate::transform::NativeTransform;

/// Tag of the generated region in the project build file.
pub const LIBS_REPOSITORY_TAG: &str = "react-native-wallet-libs-repository";

/// Line-comment syntax of Groovy build scripts.
pub const GRADLE_COMMENT: &str = "//";

/// Registers `android/libs` as a local Maven repository for every module.
pub const LIBS_REPOSITORY_BODY: &str = "allprojects {
\trepositories {
\t\tgoogle()
\t\tmaven { url \"file://${rootDir}/libs\" }
\t}
}";

/// The generated block merged into `android/build.gradle`.
pub fn libs_repository_block() -> GeneratedBlock {
    GeneratedBlock::new(LIBS_REPOSITORY_TAG, GRADLE_COMMENT, LIBS_REPOSITORY_BODY)
}

/// What an Android run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidReport {
    /// The build file that was patched.
    pub build_file: PathBuf,
    /// Staging report, `None` when nothing was staged.
    pub materialized: Option<Materialized>,
    /// A stale repository block was removed.
    pub did_clear: bool,
    /// The build file contents changed.
    pub did_merge: bool,
}

impl AndroidReport {
    fn skipped(build_file: &ProjectBuildGradle) -> Self {
        Self {
            build_file: build_file.path().to_native(),
            materialized: None,
            did_clear: false,
            did_merge: false,
        }
    }
}

/// Stages the TapAndPay SDK and adds the libs repository to the build file.
#[derive(Debug, Clone)]
pub struct AndroidTransform<E = UnzipExtractor> {
    sdk_path: Option<String>,
    materializer: Materializer<E>,
}

impl AndroidTransform<UnzipExtractor> {
    pub fn new(props: &WalletProps) -> Self {
        Self::with_extractor(props, UnzipExtractor::new())
    }
}

impl<E: Extractor> AndroidTransform<E> {
    pub fn with_extractor(props: &WalletProps, extractor: E) -> Self {
        Self::with_materializer(
            props,
            Materializer::with_extractor(extractor).depth(props.copy_depth()),
        )
    }

    pub fn with_materializer(props: &WalletProps, materializer: Materializer<E>) -> Self {
        Self {
            sdk_path: props.sdk_path().map(str::to_owned),
            materializer,
        }
    }

    pub fn sdk_path(&self) -> Option<&str> {
        self.sdk_path.as_deref()
    }

    /// Only Groovy build files can take the repository block.
    fn check_language(build_file: &ProjectBuildGradle) -> Result<()> {
        match build_file.language {
            BuildFileLanguage::Groovy => Ok(()),
            language => Err(Error::UnsupportedBuildFileFormat { language }),
        }
    }

    /// Stage the SDK into `android/libs`, then merge the repository block.
    ///
    /// Without an SDK path the build file is returned untouched and nothing
    /// is written. The language check runs before anything touches the disk.
    ///
    /// # Errors
    /// - `Error::UnsupportedBuildFileFormat` for a Kotlin build file
    /// - `Error::Sdk` if staging fails; the build file is then left unmerged
    pub fn run(&self, build_file: ProjectBuildGradle) -> Result<(ProjectBuildGradle, AndroidReport)> {
        let Some(sdk_path) = self.sdk_path.as_deref() else {
            tracing::debug!("no TapAndPay SDK path configured; skipping Android patch");
            let report = AndroidReport::skipped(&build_file);
            return Ok((build_file, report));
        };
        Self::check_language(&build_file)?;

        let materialized = self.materializer.materialize(
            &build_file.project_root,
            sdk_path,
            NativePath::AndroidLibs.as_str(),
        )?;

        let (build_file, mut report) = merge_repository(build_file);
        report.materialized = Some(materialized);
        Ok((build_file, report))
    }

    /// Like [`run`](Self::run) but only computes the merged build file.
    ///
    /// Nothing is staged, so a missing SDK source goes unnoticed.
    pub fn preview(
        &self,
        build_file: ProjectBuildGradle,
    ) -> Result<(ProjectBuildGradle, AndroidReport)> {
        if self.sdk_path.is_none() {
            let report = AndroidReport::skipped(&build_file);
            return Ok((build_file, report));
        }
        Self::check_language(&build_file)?;
        Ok(merge_repository(build_file))
    }
}

fn merge_repository(mut build_file: ProjectBuildGradle) -> (ProjectBuildGradle, AndroidReport) {
    let result = merge(build_file.contents, &libs_repository_block());
    build_file.contents = result.contents;

    if result.did_merge {
        tracing::info!(
            path = %build_file.path(),
            did_clear = result.did_clear,
            "added wallet libs repository"
        );
    }

    let report = AndroidReport {
        build_file: build_file.path().to_native(),
        materialized: None,
        did_clear: result.did_clear,
        did_merge: result.did_merge,
    };
    (build_file, report)
}

impl<E: Extractor> NativeTransform for AndroidTransform<E> {
    type Artifact = ProjectBuildGradle;

    fn name(&self) -> &'static str {
        "android"
    }

    fn apply(&self, build_file: ProjectBuildGradle) -> Result<ProjectBuildGradle> {
        self.run(build_file).map(|(build_file, _)| build_file)
    }
}

/// Apply the Android patch for `props`, extracting archives with `extractor`.
pub fn with_wallet_android<E: Extractor>(
    build_file: ProjectBuildGradle,
    props: &WalletProps,
    extractor: E,
) -> Result<ProjectBuildGradle> {
    AndroidTransform::with_extractor(props, extractor).apply(build_file)
}
