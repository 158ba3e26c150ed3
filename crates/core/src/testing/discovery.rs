use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const TEST_STEMS: [&str; 2] = ["_test", "_tests"];

/// Whether `path` names a test binary: `*_test<suffix>` or `*_tests<suffix>`.
pub fn is_test_binary(path: &Path, exe_suffix: &str) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some(stem) = file_name.strip_suffix(exe_suffix) else {
        return false;
    };

    TEST_STEMS
        .iter()
        .any(|marker| stem.len() > marker.len() && stem.ends_with(marker))
}

/// Lazily walk `root` yielding test binaries in file-name order.
///
/// Unreadable entries are skipped with a warning; a missing root yields nothing.
pub fn discover_test_binaries(root: &Path, exe_suffix: &str) -> impl Iterator<Item = PathBuf> {
    if !root.is_dir() {
        tracing::warn!("Test output root {} does not exist", root.display());
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(move |path| is_test_binary(path, exe_suffix))
}
