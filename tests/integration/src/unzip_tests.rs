//! Extraction through the system `unzip`.
//!
//! The archive is built with the system `zip`; both tests are skipped when
//! either tool is missing from `PATH`.

use std::process::Command;

use wallet_sdk::{Materializer, SdkSource};
use wallet_test_utils::project::TestProject;
use wallet_test_utils::sdk::{AAR_BYTES, sdk_archive};

fn has_tool(name: &str) -> bool {
    Command::new(name)
        .arg("-h")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn tools_available() -> bool {
    let available = has_tool("zip") && has_tool("unzip");
    if !available {
        eprintln!("zip/unzip not found, skipping");
    }
    available
}

#[test]
fn test_real_archive_is_extracted() {
    if !tools_available() {
        return;
    }
    let project = TestProject::new();
    project.write("staging/play-services-tapandpay.aar", AAR_BYTES);
    let status = Command::new("zip")
        .args(["-q", "-r", "../tapandpay.zip", "."])
        .current_dir(project.path("staging"))
        .status()
        .unwrap();
    assert!(status.success());

    let report = Materializer::new()
        .materialize(&project.normalized_root(), "./tapandpay.zip", "android/libs")
        .unwrap();

    assert!(matches!(report.source, SdkSource::Archive(_)));
    assert_eq!(project.list_dir("android/libs"), vec!["play-services-tapandpay.aar"]);
}

#[test]
fn test_corrupt_archive_reports_unzip_output() {
    if !tools_available() {
        return;
    }
    let project = TestProject::new();
    sdk_archive(&project, "broken.zip");

    let err = Materializer::new()
        .materialize(&project.normalized_root(), "broken.zip", "android/libs")
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("Failed to extract archive"), "{message}");
    assert!(message.contains("unzip exited with code"), "{message}");
}
