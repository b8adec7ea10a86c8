//! Native project transforms for wallet provisioning.
//!
//! Each transform takes one in-memory native artifact and returns it modified;
//! the caller persists the result.
//!
//! - [`IosTransform`] adds the Apple Pay in-app provisioning entitlement to the
//!   `Info.plist` mapping unless it is disabled.
//! - [`AndroidTransform`] stages the Google TapAndPay SDK into `android/libs`
//!   and registers that directory as a Maven repository in the project-level
//!   Groovy `build.gradle`. It does nothing without an SDK path.
//!
//! [`WalletPlugin`] runs both against a [`NativeProject`].

pub mod android;
pub mod artifact;
pub mod config;
pub mod error;
pub mod ios;
pub mod plugin;
pub mod transform;

pub use android::{AndroidReport, AndroidTransform, libs_repository_block, with_wallet_android};
pub use artifact::{BuildFileLanguage, InfoPlist, ProjectBuildGradle};
pub use config::WalletProps;
pub use error::{Error, Result};
pub use ios::{IosTransform, PAYMENT_PASS_PROVISIONING_KEY, with_wallet_ios};
pub use plugin::{NativeProject, WalletPlugin, with_wallet};
pub use transform::NativeTransform;
