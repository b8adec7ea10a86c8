//! Resolving plugin props and the project root from arguments.

use std::path::Path;

use wallet_fs::NormalizedPath;
use wallet_plugin::WalletProps;

use crate::cli::PropsArgs;
use crate::error::{CliError, Result};

/// Load props from `--config` if given, then apply flag overrides.
pub fn resolve_props(args: &PropsArgs) -> Result<WalletProps> {
    let mut props = match &args.config {
        Some(path) => WalletProps::load(&NormalizedPath::new(path))?,
        None => WalletProps::default(),
    };

    if let Some(sdk_path) = &args.sdk_path {
        props.google_tap_and_pay_sdk_path = Some(sdk_path.clone());
    }
    if args.no_apple_pay_provisioning {
        props.enable_apple_pay_provisioning = false;
    }
    if args.recursive_sdk_copy {
        props.recursive_sdk_copy = true;
    }

    tracing::debug!(?props, "resolved plugin props");
    Ok(props)
}

/// Canonical project root. The directory must exist.
pub fn resolve_root(path: &Path) -> Result<NormalizedPath> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "Project root is not a directory: {}",
            path.display()
        )));
    }
    Ok(NormalizedPath::new(path).canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wallet.json");
        fs::write(
            &config,
            r#"{ "googleTapAndPaySdkPath": "./from-config.zip", "enableApplePayProvisioning": true }"#,
        )
        .unwrap();

        let props = resolve_props(&PropsArgs {
            config: Some(config),
            sdk_path: Some("./from-flag.zip".into()),
            no_apple_pay_provisioning: true,
            recursive_sdk_copy: false,
        })
        .unwrap();

        assert_eq!(props.sdk_path(), Some("./from-flag.zip"));
        assert!(!props.enable_apple_pay_provisioning);
    }

    #[test]
    fn test_config_alone() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("wallet.toml");
        fs::write(&config, "googleTapAndPaySdkPath = \"vendor/sdk\"\nrecursiveSdkCopy = true\n")
            .unwrap();

        let props = resolve_props(&PropsArgs {
            config: Some(config),
            ..PropsArgs::default()
        })
        .unwrap();

        assert_eq!(props.sdk_path(), Some("vendor/sdk"));
        assert!(props.recursive_sdk_copy);
        assert!(props.enable_apple_pay_provisioning);
    }

    #[test]
    fn test_missing_root_is_user_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve_root(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }
}
