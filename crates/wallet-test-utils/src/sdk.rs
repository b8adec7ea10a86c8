//! SDK distributions in each shape the materializer accepts.
//!
//! Artifacts are a few placeholder bytes; nothing here produces a loadable
//! Android library.

use std::path::{Path, PathBuf};

use crate::project::TestProject;

/// Bytes written into placeholder `.aar` files.
pub const AAR_BYTES: &[u8] = b"PK\x03\x04placeholder-aar";

/// A directory `rel` holding `a.aar`, `b.txt` and a nested `sub/c.aar`.
pub fn sdk_directory(project: &TestProject, rel: &str) -> PathBuf {
    project.write(&format!("{rel}/a.aar"), AAR_BYTES);
    project.write(&format!("{rel}/b.txt"), "TapAndPay 18.3.3");
    project.write(&format!("{rel}/sub/c.aar"), AAR_BYTES);
    project.path(rel)
}

/// A single artifact at `rel`.
pub fn sdk_file(project: &TestProject, rel: &str) -> PathBuf {
    project.write(rel, AAR_BYTES)
}

/// A file at `rel` named like a zip archive. Its contents are not a real archive,
/// so pair it with a fake extractor.
pub fn sdk_archive(project: &TestProject, rel: &str) -> PathBuf {
    project.write(rel, b"PK\x05\x06")
}

/// Write an executable shell script standing in for `unzip`.
///
/// The script prints `stderr` to standard error and exits with `code`.
#[cfg(unix)]
pub fn fake_unzip(dir: &Path, code: i32, stderr: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-unzip");
    std::fs::write(
        &script,
        format!("#!/bin/sh\necho '{stderr}' >&2\nexit {code}\n"),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
