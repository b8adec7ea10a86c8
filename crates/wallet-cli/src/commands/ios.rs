//! iOS command implementation

use std::path::Path;

use colored::Colorize;

use wallet_fs::NormalizedPath;
use wallet_plugin::{InfoPlist, PAYMENT_PASS_PROVISIONING_KEY, with_wallet_ios};

use super::props::resolve_props;
use crate::cli::PropsArgs;
use crate::error::Result;

/// Run the ios command
///
/// Loads the mapping at `info_plist` (empty if missing), applies the iOS patch
/// and writes it back when it changed.
pub fn run_ios(info_plist: &Path, args: &PropsArgs) -> Result<()> {
    let props = resolve_props(args)?;
    patch_info_plist(&NormalizedPath::new(info_plist), &props)
}

pub(crate) fn patch_info_plist(
    path: &NormalizedPath,
    props: &wallet_plugin::WalletProps,
) -> Result<()> {
    let original = InfoPlist::load(path)?;
    let patched = with_wallet_ios(original.clone(), props)?;

    if patched == original {
        println!("{} {} unchanged", "OK".green().bold(), path.as_str().yellow());
        return Ok(());
    }

    patched.save(path)?;
    println!(
        "{} Set {} in {}",
        "OK".green().bold(),
        PAYMENT_PASS_PROVISIONING_KEY.cyan(),
        path.as_str().yellow()
    );
    Ok(())
}
