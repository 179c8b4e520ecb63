//! Fixture helpers shared by the golden-file harness.

use std::path::{Path, PathBuf};

use fthis_rewrite::{rewrite, DeclarationKeyword, RewriteOptions};
use walkdir::WalkDir;

pub const INPUT_SUFFIX: &str = ".input.fjs";
pub const EXPECTED_SUFFIX: &str = ".expected.js";

/// `tests/fixtures` at the workspace root.
pub fn fixtures_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is crates/fthis_test/, so go up two levels.
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(|root| root.join("tests").join("fixtures"))
        .unwrap_or_else(|| PathBuf::from("tests/fixtures"))
}

/// Every `*.input.fjs` below `dir`, sorted.
pub fn collect_input_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(INPUT_SUFFIX))
        })
        .collect();
    files.sort();
    files
}

pub fn expected_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    PathBuf::from(name.replace(INPUT_SUFFIX, EXPECTED_SUFFIX))
}

/// Options for a fixture: a `const.` or `let.` file name prefix picks the
/// declaration keyword, otherwise the default applies.
pub fn options_for(input: &Path) -> RewriteOptions {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let keyword = name
        .split('.')
        .next()
        .and_then(|prefix| prefix.parse::<DeclarationKeyword>().ok())
        .unwrap_or_default();
    RewriteOptions::with_keyword(keyword)
}

pub fn run_fixture(input: &Path, source: &str) -> String {
    rewrite(source, &options_for(input))
}
