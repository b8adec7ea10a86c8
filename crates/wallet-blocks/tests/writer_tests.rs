//! Integration tests for generated block merging.

use pretty_assertions::assert_eq;
use rstest::rstest;
use wallet_blocks::writer::{BlockStatus, GeneratedBlock, block_status, merge, remove_region};
use wallet_blocks::{find_region, parse_regions};

const TAG: &str = "react-native-wallet-libs-repository";

const REPOSITORY_BODY: &str = "allprojects {
\trepositories {
\t\tgoogle()
\t\tmaven { url \"file://${rootDir}/libs\" }
\t}
}";

const BUILD_GRADLE: &str = "buildscript {
    ext { buildToolsVersion = \"35.0.0\" }
}

apply plugin: \"expo-root-project\"";

fn repository_block() -> GeneratedBlock {
    GeneratedBlock::new(TAG, "//", REPOSITORY_BODY)
}

#[test]
fn test_merge_appends_region_to_build_file() {
    let result = merge(BUILD_GRADLE.to_string(), &repository_block());

    let expected = format!(
        "{BUILD_GRADLE}\n// @generated begin {TAG} - wallet prebuild (DO NOT MODIFY) \
         sync-39c2405122e87263bdae331369232d51408cd59bf5c27d61808b05918a4c3693\n\
         {REPOSITORY_BODY}\n// @generated end {TAG}"
    );
    assert_eq!(result.contents, expected);
    assert!(result.did_merge);
    assert!(!result.did_clear);
}

#[test]
fn test_merge_snapshot_small_block() {
    let block = GeneratedBlock::new("libs-repo", "//", "google()");
    let result = merge("buildscript {}".to_string(), &block);

    insta::assert_snapshot!(result.contents, @r"
    buildscript {}
    // @generated begin libs-repo - wallet prebuild (DO NOT MODIFY) sync-753a9e617c3d8173e1aa4144bb33cf83f388c986ac336e81d4bfc5e138ab31d8
    google()
    // @generated end libs-repo
    ");
}

#[test]
fn test_merge_twice_is_noop() {
    let first = merge(BUILD_GRADLE.to_string(), &repository_block());
    let second = merge(first.contents.clone(), &repository_block());

    assert!(!second.did_merge);
    assert!(!second.did_clear);
    assert_eq!(second.contents, first.contents);
}

#[test]
fn test_changed_body_clears_stale_region() {
    let stale = GeneratedBlock::new(TAG, "//", "allprojects { repositories { jcenter() } }");
    let first = merge(BUILD_GRADLE.to_string(), &stale).contents;

    let result = merge(first, &repository_block());

    assert!(result.did_clear);
    assert!(result.did_merge);
    assert!(!result.contents.contains("jcenter()"));
    assert_eq!(parse_regions(&result.contents).len(), 1);
    assert_eq!(find_region(&result.contents, TAG).unwrap().body, REPOSITORY_BODY);
}

#[test]
fn test_clear_keeps_content_after_region() {
    let old = GeneratedBlock::new(TAG, "//", "old");
    let with_region = merge("head".to_string(), &old).contents;
    let with_tail = format!("{with_region}\ntail");

    let result = merge(with_tail, &GeneratedBlock::new(TAG, "//", "new"));

    assert!(result.contents.starts_with("head\ntail\n"));
    assert!(result.contents.ends_with(&format!("new\n// @generated end {TAG}")));
}

#[test]
fn test_other_tags_are_preserved() {
    let other = GeneratedBlock::new("expo-camera", "//", "maven { url 'cameraview' }");
    let doc = merge(BUILD_GRADLE.to_string(), &other).contents;
    let doc = merge(doc, &GeneratedBlock::new(TAG, "//", "old")).contents;

    let result = merge(doc, &repository_block());

    let regions = parse_regions(&result.contents);
    let tags: Vec<_> = regions.iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(tags, vec!["expo-camera", TAG]);
}

#[rstest]
#[case::header_only(format!("{BUILD_GRADLE}\n// @generated begin {TAG} - wallet prebuild (DO NOT MODIFY) sync-00\nold"))]
#[case::footer_only(format!("{BUILD_GRADLE}\nold\n// @generated end {TAG}"))]
#[case::footer_first(format!("// @generated end {TAG}\n{BUILD_GRADLE}\n// @generated begin {TAG} - x"))]
fn test_malformed_markers_are_left_alone(#[case] document: String) {
    let result = merge(document.clone(), &repository_block());

    assert!(result.did_merge);
    assert!(!result.did_clear);
    assert!(result.contents.starts_with(&document));
    assert_eq!(result.contents, format!("{document}\n{}", repository_block().render()));
}

#[test]
fn test_comment_prefix_used_for_markers() {
    let block = GeneratedBlock::new("pods", "#", "pod 'TapAndPay'");
    let result = merge("platform :ios".to_string(), &block);

    assert!(result.contents.contains("\n# @generated begin pods - "));
    assert!(result.contents.ends_with("\n# @generated end pods"));
}

#[test]
fn test_block_status() {
    let doc = merge(BUILD_GRADLE.to_string(), &repository_block()).contents;

    assert_eq!(block_status(BUILD_GRADLE, &repository_block()), BlockStatus::Missing);
    assert_eq!(block_status(&doc, &repository_block()), BlockStatus::Current);
    assert_eq!(
        block_status(&doc, &GeneratedBlock::new(TAG, "//", "changed")),
        BlockStatus::Stale
    );
}

#[test]
fn test_remove_region_restores_original() {
    let doc = merge(BUILD_GRADLE.to_string(), &repository_block()).contents;

    assert_eq!(remove_region(&doc, TAG).unwrap(), BUILD_GRADLE);
}

#[test]
fn test_remove_region_missing_fails() {
    assert!(remove_region(BUILD_GRADLE, TAG).is_err());
}
