//! Android command implementation

use std::path::Path;

use colored::Colorize;

use wallet_plugin::{AndroidReport, AndroidTransform, ProjectBuildGradle};

use super::diff::print_diff;
use super::props::{resolve_props, resolve_root};
use crate::cli::PropsArgs;
use crate::error::Result;

/// Run the android command
///
/// Stages the SDK into `android/libs` and merges the repository block into the
/// project build file. With `dry_run` only the build file diff is printed.
pub fn run_android(project_root: &Path, args: &PropsArgs, dry_run: bool) -> Result<()> {
    let root = resolve_root(project_root)?;
    let props = resolve_props(args)?;
    let transform = AndroidTransform::new(&props);

    if transform.sdk_path().is_none() {
        println!(
            "{} No TapAndPay SDK path configured; android project left untouched.",
            "SKIP".yellow().bold()
        );
        return Ok(());
    }

    let build_file = ProjectBuildGradle::load(&root)?;

    if dry_run {
        let original = build_file.contents.clone();
        let (patched, report) = transform.preview(build_file)?;
        if report.did_merge {
            print_diff(&relative_build_file(&patched), &original, &patched.contents);
        } else {
            println!("{} Build file already up to date.", "OK".green().bold());
        }
        return Ok(());
    }

    let (patched, report) = transform.run(build_file)?;
    if report.did_merge {
        patched.save()?;
    }
    print_report(&report);
    Ok(())
}

/// The build file path relative to the project root, for display.
pub fn relative_build_file(build_file: &ProjectBuildGradle) -> String {
    build_file.language.native_path().to_string()
}

/// Print what an Android run did.
pub fn print_report(report: &AndroidReport) {
    if let Some(materialized) = &report.materialized {
        println!(
            "{} Staged {} into {}",
            "=>".blue().bold(),
            materialized.source.to_string().cyan(),
            materialized.destination.display()
        );
        for file in &materialized.files {
            println!("   {} {}", "+".green(), file.display());
        }
    }

    if report.did_merge {
        let verb = if report.did_clear { "Updated" } else { "Added" };
        println!(
            "{} {} libs repository in {}",
            "OK".green().bold(),
            verb,
            report.build_file.display()
        );
    } else {
        println!(
            "{} Libs repository already up to date in {}",
            "OK".green().bold(),
            report.build_file.display()
        );
    }
}
