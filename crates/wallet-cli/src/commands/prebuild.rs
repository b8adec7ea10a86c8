//! Prebuild command implementation

use std::path::Path;

use colored::Colorize;

use wallet_fs::NativePath;
use wallet_plugin::{AndroidTransform, ProjectBuildGradle};

use super::android::print_report;
use super::ios::patch_info_plist;
use super::props::{resolve_props, resolve_root};
use crate::cli::PropsArgs;
use crate::error::Result;

/// Run the prebuild command
///
/// Applies the iOS patch, then the Android patch. The iOS result is written
/// before the Android patch starts, so an Android failure does not undo it.
pub fn run_prebuild(
    project_root: &Path,
    info_plist: Option<&Path>,
    args: &PropsArgs,
) -> Result<()> {
    let root = resolve_root(project_root)?;
    let props = resolve_props(args)?;

    println!("{} Patching ios", "=>".blue().bold());
    let plist_path = match info_plist {
        Some(path) => root.resolve(path),
        None => NativePath::IosInfoPlist.under(&root),
    };
    patch_info_plist(&plist_path, &props)?;

    println!("{} Patching android", "=>".blue().bold());
    let transform = AndroidTransform::new(&props);
    if transform.sdk_path().is_none() {
        println!(
            "{} No TapAndPay SDK path configured; android project left untouched.",
            "SKIP".yellow().bold()
        );
        return Ok(());
    }

    let (patched, report) = transform.run(ProjectBuildGradle::load(&root)?)?;
    if report.did_merge {
        patched.save()?;
    }
    print_report(&report);
    Ok(())
}
