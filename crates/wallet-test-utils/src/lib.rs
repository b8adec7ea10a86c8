//! Shared test utilities for the wallet native patcher workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`](project::TestProject) builder for a generated native project
//! - [`sdk`]: SDK distributions in the shapes the materializer accepts

pub mod project;
pub mod sdk;

/// A minimal project-level `build.gradle` as emitted by the app template.
pub const GROOVY_BUILD_GRADLE: &str = r#"// Top-level build file where you can add configuration options common to all sub-projects/modules.

buildscript {
  repositories {
    google()
    mavenCentral()
  }
  dependencies {
    classpath('com.android.tools.build:gradle')
    classpath('com.facebook.react:react-native-gradle-plugin')
  }
}

allprojects {
  repositories {
    google()
    mavenCentral()
    maven { url 'https://www.jitpack.io' }
  }
}

apply plugin: "expo-root-project"
apply plugin: "com.facebook.react.rootproject""#;

/// A minimal project-level `build.gradle.kts`.
pub const KOTLIN_BUILD_GRADLE: &str = r#"plugins {
    id("com.android.application") version "8.6.0" apply false
}

allprojects {
    repositories {
        google()
        mavenCentral()
    }
}"#;
