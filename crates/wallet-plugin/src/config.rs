//! Plugin configuration.

use serde::{Deserialize, Serialize};
use wallet_fs::{ConfigStore, NormalizedPath};
use wallet_sdk::CopyDepth;

use crate::error::Result;

fn default_true() -> bool {
    true
}

/// Options accepted by the wallet plugin.
///
/// Field names follow the app config, so a JSON plugin entry such as
/// `{ "googleTapAndPaySdkPath": "./libs/tapandpay.zip" }` deserializes as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProps {
    /// Zip archive, directory or single artifact of the Google TapAndPay SDK,
    /// relative to the project root. Without it the Android patch is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_tap_and_pay_sdk_path: Option<String>,

    /// Add the Apple Pay in-app provisioning entitlement on iOS.
    #[serde(default = "default_true")]
    pub enable_apple_pay_provisioning: bool,

    /// Copy nested directories of a directory SDK source as well.
    #[serde(default)]
    pub recursive_sdk_copy: bool,
}

impl Default for WalletProps {
    fn default() -> Self {
        Self {
            google_tap_and_pay_sdk_path: None,
            enable_apple_pay_provisioning: true,
            recursive_sdk_copy: false,
        }
    }
}

impl WalletProps {
    /// Load props from a `.toml`, `.json` or `.yaml` file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// The SDK path, treating an empty string as absent.
    pub fn sdk_path(&self) -> Option<&str> {
        self.google_tap_and_pay_sdk_path
            .as_deref()
            .filter(|path| !path.is_empty())
    }

    pub fn with_sdk_path(mut self, path: impl Into<String>) -> Self {
        self.google_tap_and_pay_sdk_path = Some(path.into());
        self
    }

    pub fn copy_depth(&self) -> CopyDepth {
        if self.recursive_sdk_copy {
            CopyDepth::Recursive
        } else {
            CopyDepth::TopLevel
        }
    }
}
