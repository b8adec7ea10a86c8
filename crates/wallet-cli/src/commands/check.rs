//! Check and eject command implementations
//!
//! Both inspect the libs repository block of the project build file without
//! touching `android/libs`.

use std::path::Path;

use colored::Colorize;

use wallet_blocks::{BlockStatus, block_status, remove_region};
use wallet_plugin::android::LIBS_REPOSITORY_TAG;
use wallet_plugin::{ProjectBuildGradle, libs_repository_block};

use super::props::resolve_root;
use crate::error::{CliError, Result};

/// Run the check command
///
/// Fails when the block is missing or carries an outdated body.
pub fn run_check(project_root: &Path) -> Result<()> {
    let root = resolve_root(project_root)?;
    let build_file = ProjectBuildGradle::load(&root)?;
    let path = build_file.path();

    match block_status(&build_file.contents, &libs_repository_block()) {
        BlockStatus::Current => {
            println!(
                "{} Libs repository is up to date in {}",
                "OK".green().bold(),
                path.as_str().yellow()
            );
            Ok(())
        }
        BlockStatus::Stale => {
            println!("{} {}", "STALE".red().bold(), path.as_str().yellow());
            Err(CliError::user(format!(
                "Libs repository block in {path} is outdated; run `wallet android` to refresh it"
            )))
        }
        BlockStatus::Missing => {
            println!("{} {}", "MISSING".yellow().bold(), path.as_str().yellow());
            Err(CliError::user(format!(
                "No libs repository block in {path}; run `wallet android` to add it"
            )))
        }
    }
}

/// Run the eject command
///
/// Removes the libs repository block. A build file without one is left alone.
pub fn run_eject(project_root: &Path) -> Result<()> {
    let root = resolve_root(project_root)?;
    let mut build_file = ProjectBuildGradle::load(&root)?;

    match remove_region(&build_file.contents, LIBS_REPOSITORY_TAG) {
        Ok(contents) => {
            build_file.contents = contents;
            build_file.save()?;
            println!(
                "{} Removed libs repository from {}",
                "OK".green().bold(),
                build_file.path().as_str().yellow()
            );
            Ok(())
        }
        Err(wallet_blocks::Error::RegionNotFound { .. }) => {
            println!(
                "{} No libs repository block in {}",
                "OK".green().bold(),
                build_file.path().as_str().yellow()
            );
            Ok(())
        }
    }
}
