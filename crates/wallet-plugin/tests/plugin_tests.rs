//! Tests for running both platform patches together.

use std::path::Path;

use serde_json::Value;
use wallet_plugin::{
    Error, InfoPlist, NativeProject, PAYMENT_PASS_PROVISIONING_KEY, ProjectBuildGradle,
    WalletPlugin, WalletProps, libs_repository_block, with_wallet,
};
use wallet_sdk::Extractor;
use wallet_test_utils::project::TestProject;
use wallet_test_utils::sdk::sdk_file;

struct NoExtractor;

impl Extractor for NoExtractor {
    fn extract(&self, archive: &Path, _dest: &Path) -> wallet_sdk::Result<()> {
        panic!("unexpected extraction of {}", archive.display());
    }
}

fn native_project(project: &TestProject) -> NativeProject {
    NativeProject {
        info_plist: InfoPlist::new(),
        build_gradle: ProjectBuildGradle::load(&project.normalized_root()).unwrap(),
    }
}

#[test]
fn test_both_platforms_patched() {
    let project = TestProject::new();
    project.with_groovy_build_file();
    sdk_file(&project, "vendor/sdk.aar");
    let props = WalletProps::default().with_sdk_path("vendor/sdk.aar");

    let patched = with_wallet(native_project(&project), &props, NoExtractor).unwrap();

    assert_eq!(
        patched.info_plist.get(PAYMENT_PASS_PROVISIONING_KEY),
        Some(&Value::Bool(true))
    );
    assert!(
        patched
            .build_gradle
            .contents
            .contains(&libs_repository_block().header_line())
    );
    project.assert_file_exists("android/libs/sdk.aar");
}

#[test]
fn test_ios_runs_without_sdk_path() {
    let project = TestProject::new();
    project.with_groovy_build_file();
    let original = native_project(&project);

    let (patched, report) = WalletPlugin::with_extractor(&WalletProps::default(), NoExtractor)
        .run(original.clone())
        .unwrap();

    assert_eq!(patched.build_gradle, original.build_gradle);
    assert!(!report.did_merge);
    assert_eq!(patched.info_plist.len(), 1);
}

#[test]
fn test_kotlin_project_fails_android_only() {
    let project = TestProject::new();
    project.with_kotlin_build_file();
    let props = WalletProps::default().with_sdk_path("vendor/sdk.aar");

    let plugin = WalletPlugin::with_extractor(&props, NoExtractor);
    let err = plugin.run(native_project(&project)).unwrap_err();

    assert!(matches!(err, Error::UnsupportedBuildFileFormat { .. }));
    assert!(plugin.ios().enabled());
}

#[test]
fn test_missing_build_file() {
    let project = TestProject::new();

    let err = ProjectBuildGradle::load(&project.normalized_root()).unwrap_err();

    assert!(matches!(err, Error::BuildFileNotFound { .. }));
}
