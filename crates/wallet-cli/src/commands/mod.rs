//! Command implementations for wallet-cli

pub mod android;
pub mod check;
pub mod diff;
pub mod ios;
pub mod prebuild;
pub mod props;

pub use android::run_android;
pub use check::{run_check, run_eject};
pub use ios::run_ios;
pub use prebuild::run_prebuild;
