//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Wallet native patcher - Prepare generated iOS and Android projects for wallet provisioning
#[derive(Parser, Debug)]
#[command(name = "wallet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Plugin options, read from a file and overridden by flags
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PropsArgs {
    /// Plugin props file (.json, .toml, .yaml)
    #[arg(short, long, env = "WALLET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Google TapAndPay SDK: a .zip archive, a directory or a single artifact
    #[arg(long, env = "WALLET_SDK_PATH")]
    pub sdk_path: Option<String>,

    /// Do not add the Apple Pay in-app provisioning entitlement
    #[arg(long)]
    pub no_apple_pay_provisioning: bool,

    /// Copy nested directories of a directory SDK as well
    #[arg(long)]
    pub recursive_sdk_copy: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Stage the TapAndPay SDK and add the libs repository to android/build.gradle
    ///
    /// Examples:
    ///   wallet android --sdk-path ./libs/tapandpay-v18.3.3.zip
    ///   wallet android --sdk-path ./vendor/tapandpay --dry-run
    Android {
        /// App project root, the parent of android/
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,

        #[command(flatten)]
        props: PropsArgs,

        /// Print the build file diff without staging or writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Add the Apple Pay provisioning entitlement to an Info.plist mapping
    Ios {
        /// Info.plist mapping persisted as JSON, TOML or YAML; created if missing
        #[arg(long)]
        info_plist: PathBuf,

        #[command(flatten)]
        props: PropsArgs,
    },

    /// Apply the iOS patch, then the Android patch
    Prebuild {
        /// App project root, the parent of android/ and ios/
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,

        /// Info.plist mapping, relative to the project root [default: ios/Info.plist.json]
        #[arg(long)]
        info_plist: Option<PathBuf>,

        #[command(flatten)]
        props: PropsArgs,
    },

    /// Check that android/build.gradle carries an up-to-date libs repository block
    Check {
        /// App project root, the parent of android/
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,
    },

    /// Remove the libs repository block from android/build.gradle
    Eject {
        /// App project root, the parent of android/
        #[arg(short, long, default_value = ".")]
        project_root: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_android_with_overrides() {
        let cli = Cli::parse_from([
            "wallet",
            "android",
            "--project-root",
            "app",
            "--sdk-path",
            "./libs/tapandpay.zip",
            "--dry-run",
        ]);

        match cli.command {
            Some(Commands::Android {
                project_root,
                props,
                dry_run,
            }) => {
                assert_eq!(project_root, PathBuf::from("app"));
                assert_eq!(props.sdk_path.as_deref(), Some("./libs/tapandpay.zip"));
                assert!(dry_run);
            }
            other => panic!("expected android command, got {other:?}"),
        }
    }

    #[test]
    fn parse_prebuild_defaults() {
        let cli = Cli::parse_from(["wallet", "prebuild"]);
        assert_eq!(
            cli.command,
            Some(Commands::Prebuild {
                project_root: PathBuf::from("."),
                info_plist: None,
                props: PropsArgs::default(),
            })
        );
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["wallet", "check", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn ios_requires_info_plist() {
        assert!(Cli::try_parse_from(["wallet", "ios"]).is_err());
    }
}
