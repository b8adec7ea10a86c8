//! Error types for wallet-plugin

use std::path::PathBuf;

use crate::artifact::BuildFileLanguage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Cannot add the wallet libs repository because the project build file is {language}, not groovy"
    )]
    UnsupportedBuildFileFormat { language: BuildFileLanguage },

    #[error("No project-level build.gradle or build.gradle.kts under {}", root.display())]
    BuildFileNotFound { root: PathBuf },

    #[error(transparent)]
    Sdk(#[from] wallet_sdk::Error),

    #[error(transparent)]
    Fs(#[from] wallet_fs::Error),
}
