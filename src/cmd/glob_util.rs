//! Schema source discovery for the generate command.
//!
//! Expands the input option into an ordered list of schema declaration
//! files. Directories are scanned recursively for declaration files; any
//! other input is treated as a glob pattern like `models/**/*.json`.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory component that is never descended into when matching.
const EXCLUDED_DIR: &str = "node_modules";

/// File extensions recognized as schema declarations when scanning a directory.
const SCHEMA_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Expand an input path or glob pattern into a sorted list of source files.
///
/// Zero matches is not an error: the caller emits a header-only document
/// for an empty source list.
///
/// # Errors
///
/// Returns an error only if the glob pattern itself is invalid or a matched
/// path cannot be read back from the filesystem.
pub fn discover_sources(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let root = input.to_string_lossy();
        let pattern = format!("{}/**/*", root.trim_end_matches('/'));
        let mut files = collect(&pattern)?;
        files.retain(|p| has_schema_extension(p));
        return Ok(files);
    }

    collect(&input.to_string_lossy())
}

fn collect(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern)
        .map_err(|e| anyhow::anyhow!("invalid glob pattern '{}': {}", pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| anyhow::anyhow!("error reading path for pattern '{}': {}", pattern, e))?;
        if path.is_file() && !is_excluded(&path) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

fn is_excluded(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == EXCLUDED_DIR)
}

fn has_schema_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SCHEMA_EXTENSIONS.contains(&e))
}
