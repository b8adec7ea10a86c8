//! Running every platform patch over a native project.

use wallet_sdk::{Extractor, UnzipExtractor};

use crate::android::{AndroidReport, AndroidTransform};
use crate::artifact::{InfoPlist, ProjectBuildGradle};
use crate::config::WalletProps;
use crate::error::Result;
use crate::ios::IosTransform;
use crate::transform::NativeTransform;

/// The native artifacts a prebuild hands to the plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeProject {
    pub info_plist: InfoPlist,
    pub build_gradle: ProjectBuildGradle,
}

/// The iOS and Android transforms configured from one set of props.
#[derive(Debug, Clone)]
pub struct WalletPlugin<E = UnzipExtractor> {
    ios: IosTransform,
    android: AndroidTransform<E>,
}

impl WalletPlugin<UnzipExtractor> {
    pub fn new(props: &WalletProps) -> Self {
        Self::with_extractor(props, UnzipExtractor::new())
    }
}

impl<E: Extractor> WalletPlugin<E> {
    pub fn with_extractor(props: &WalletProps, extractor: E) -> Self {
        Self {
            ios: IosTransform::new(props),
            android: AndroidTransform::with_extractor(props, extractor),
        }
    }

    pub fn ios(&self) -> &IosTransform {
        &self.ios
    }

    pub fn android(&self) -> &AndroidTransform<E> {
        &self.android
    }

    /// Apply the iOS patch, then the Android patch.
    ///
    /// The two do not depend on each other. An Android failure is returned
    /// after the iOS patch has already been computed, but nothing of it is
    /// persisted here.
    pub fn run(&self, project: NativeProject) -> Result<(NativeProject, AndroidReport)> {
        let NativeProject {
            info_plist,
            build_gradle,
        } = project;

        tracing::debug!(transform = self.ios.name(), "applying transform");
        let info_plist = self.ios.apply(info_plist)?;

        tracing::debug!(transform = self.android.name(), "applying transform");
        let (build_gradle, report) = self.android.run(build_gradle)?;

        Ok((
            NativeProject {
                info_plist,
                build_gradle,
            },
            report,
        ))
    }
}

impl<E: Extractor> NativeTransform for WalletPlugin<E> {
    type Artifact = NativeProject;

    fn name(&self) -> &'static str {
        "wallet"
    }

    fn apply(&self, project: NativeProject) -> Result<NativeProject> {
        self.run(project).map(|(project, _)| project)
    }
}

/// Apply both platform patches for `props`.
pub fn with_wallet<E: Extractor>(
    project: NativeProject,
    props: &WalletProps,
    extractor: E,
) -> Result<NativeProject> {
    WalletPlugin::with_extractor(props, extractor).apply(project)
}
