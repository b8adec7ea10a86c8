//! End-to-end prebuild flow
//!
//! props file -> native project -> both transforms -> persisted artifacts -> rerun -> eject

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use serde_json::Value;
use wallet_blocks::{BlockStatus, block_status, find_region, remove_region};
use wallet_fs::NormalizedPath;
use wallet_plugin::android::LIBS_REPOSITORY_TAG;
use wallet_plugin::{
    InfoPlist, NativeProject, PAYMENT_PASS_PROVISIONING_KEY, ProjectBuildGradle, WalletPlugin,
    WalletProps, libs_repository_block,
};
use wallet_sdk::{Extractor, SdkSource};
use wallet_test_utils::GROOVY_BUILD_GRADLE;
use wallet_test_utils::project::TestProject;
use wallet_test_utils::sdk::{AAR_BYTES, sdk_archive};

/// Writes the artifacts a TapAndPay archive would contain.
struct UnpackingExtractor;

impl Extractor for UnpackingExtractor {
    fn extract(&self, _archive: &Path, dest: &Path) -> wallet_sdk::Result<()> {
        let artifact = dest.join("com/google/android/gms/play-services-tapandpay/18.3.3");
        fs::create_dir_all(&artifact).map_err(|e| wallet_fs::Error::io(&artifact, e))?;
        let aar = artifact.join("play-services-tapandpay-18.3.3.aar");
        fs::write(&aar, AAR_BYTES).map_err(|e| wallet_fs::Error::io(&aar, e))?;
        Ok(())
    }
}

fn setup_project() -> TestProject {
    let project = TestProject::new();
    project.with_groovy_build_file();
    project.write(
        "ios/Info.plist.json",
        r#"{ "CFBundleDisplayName": "Wallet", "CFBundleVersion": "42" }"#,
    );
    sdk_archive(&project, "libs/tapandpay-v18.3.3.zip");
    project.write(
        "wallet.yaml",
        "googleTapAndPaySdkPath: ./libs/tapandpay-v18.3.3.zip\n",
    );
    project
}

fn prebuild(project: &TestProject) -> wallet_plugin::AndroidReport {
    let root = project.normalized_root();
    let props = WalletProps::load(&root.join("wallet.yaml")).unwrap();
    let plist_path = root.join("ios/Info.plist.json");

    let native = NativeProject {
        info_plist: InfoPlist::load(&plist_path).unwrap(),
        build_gradle: ProjectBuildGradle::load(&root).unwrap(),
    };

    let (patched, report) = WalletPlugin::with_extractor(&props, UnpackingExtractor)
        .run(native)
        .unwrap();

    patched.info_plist.save(&plist_path).unwrap();
    patched.build_gradle.save().unwrap();
    report
}

#[test]
fn test_full_prebuild() {
    let project = setup_project();

    let report = prebuild(&project);

    assert!(report.did_merge);
    assert!(matches!(
        report.materialized.as_ref().map(|m| &m.source),
        Some(SdkSource::Archive(_))
    ));
    project.assert_file_exists(
        "android/libs/com/google/android/gms/play-services-tapandpay/18.3.3/play-services-tapandpay-18.3.3.aar",
    );

    let gradle = project.read("android/build.gradle");
    let region = find_region(&gradle, LIBS_REPOSITORY_TAG).unwrap();
    assert_eq!(region.body, libs_repository_block().body);
    assert_eq!(
        region.fingerprint.as_deref(),
        Some("39c2405122e87263bdae331369232d51408cd59bf5c27d61808b05918a4c3693")
    );

    let plist: Value = serde_json::from_str(&project.read("ios/Info.plist.json")).unwrap();
    assert_eq!(plist["CFBundleVersion"], "42");
    assert_eq!(plist[PAYMENT_PASS_PROVISIONING_KEY], true);
}

#[test]
fn test_rerun_changes_nothing() {
    let project = setup_project();
    prebuild(&project);
    let gradle = project.read("android/build.gradle");
    let plist = project.read("ios/Info.plist.json");

    let report = prebuild(&project);

    assert!(!report.did_merge);
    assert_eq!(project.read("android/build.gradle"), gradle);
    assert_eq!(project.read("ios/Info.plist.json"), plist);
}

#[test]
fn test_eject_after_prebuild() {
    let project = setup_project();
    prebuild(&project);

    let gradle = project.read("android/build.gradle");
    assert_eq!(
        block_status(&gradle, &libs_repository_block()),
        BlockStatus::Current
    );

    let ejected = remove_region(&gradle, LIBS_REPOSITORY_TAG).unwrap();
    assert_eq!(ejected, GROOVY_BUILD_GRADLE);
}

#[test]
fn test_project_without_sdk_only_patches_ios() {
    let project = TestProject::new();
    project.with_groovy_build_file();
    let root = project.normalized_root();

    let native = NativeProject {
        info_plist: InfoPlist::new(),
        build_gradle: ProjectBuildGradle::load(&root).unwrap(),
    };
    let (patched, report) = WalletPlugin::with_extractor(&WalletProps::default(), UnpackingExtractor)
        .run(native)
        .unwrap();

    assert!(report.materialized.is_none());
    assert_eq!(patched.build_gradle.contents, GROOVY_BUILD_GRADLE);
    assert!(patched.info_plist.contains_key(PAYMENT_PASS_PROVISIONING_KEY));
    assert!(!NormalizedPath::new(project.path("android/libs")).exists());
}
