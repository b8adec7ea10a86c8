//! iOS entitlement patch.

use serde_json::Value;

use crate::artifact::InfoPlist;
use crate::config::WalletProps;
use crate::error::Result;
use crate::transform::NativeTransform;

/// Entitlement that allows in-app provisioning of payment passes.
pub const PAYMENT_PASS_PROVISIONING_KEY: &str = "com.apple.developer.payment-pass-provisioning";

/// Sets [`PAYMENT_PASS_PROVISIONING_KEY`] to `true` in the `Info.plist` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IosTransform {
    enabled: bool,
}

impl IosTransform {
    pub fn new(props: &WalletProps) -> Self {
        Self {
            enabled: props.enable_apple_pay_provisioning,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl NativeTransform for IosTransform {
    type Artifact = InfoPlist;

    fn name(&self) -> &'static str {
        "ios"
    }

    fn apply(&self, mut plist: InfoPlist) -> Result<InfoPlist> {
        if !self.enabled {
            tracing::debug!("Apple Pay provisioning disabled; Info.plist unchanged");
            return Ok(plist);
        }

        let previous = plist.insert(PAYMENT_PASS_PROVISIONING_KEY, Value::Bool(true));
        if previous.as_ref() != Some(&Value::Bool(true)) {
            tracing::info!(key = PAYMENT_PASS_PROVISIONING_KEY, "enabled Apple Pay provisioning");
        }
        Ok(plist)
    }
}

/// Apply the iOS patch for `props` to `plist`.
pub fn with_wallet_ios(plist: InfoPlist, props: &WalletProps) -> Result<InfoPlist> {
    IosTransform::new(props).apply(plist)
}
