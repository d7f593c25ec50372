//! YAML file discovery.
//!
//! Recursively walks a root directory and collects every file with a
//! `.yaml` or `.yml` extension (case-sensitive). Regular files are visited,
//! directories are descended into, symlinked directories are not traversed,
//! and hidden files get no special treatment. A missing root yields an empty
//! list rather than an error; a batch fixer with nothing to do is not a
//! failure.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

/// YAML file extensions to process (case-sensitive)
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Check if a file has a YAML extension
///
/// Checks against the default extensions and any extra extensions provided.
#[must_use]
pub fn is_yaml_file(path: &Path, extra_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            if YAML_EXTENSIONS.contains(&ext) {
                return true;
            }
            // Extra extensions may be given with or without a leading dot
            extra_extensions
                .iter()
                .any(|extra| ext == extra.strip_prefix('.').unwrap_or(extra))
        })
}

/// Check if a path matches any exclusion pattern
#[must_use]
pub fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        // Match against full path
        if pattern.matches(&path_str) {
            return true;
        }

        // Match against file name only
        if let Some(file_name) = path.file_name() {
            if pattern.matches(&file_name.to_string_lossy()) {
                return true;
            }
        }

        // Match against each path component (for directory patterns)
        for component in path.components() {
            if let std::path::Component::Normal(c) = component {
                if pattern.matches(&c.to_string_lossy()) {
                    return true;
                }
            }
        }
    }

    false
}

/// Collect every YAML file under `root`, recursively.
///
/// Traversal order is directory order, deterministic within a run. A root
/// that does not exist or is not a directory produces an empty list.
#[must_use]
pub fn discover_files(
    root: &Path,
    extra_extensions: &[String],
    exclude: &[Pattern],
) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        let path = entry.path();
        if entry.file_type().is_file()
            && is_yaml_file(path, extra_extensions)
            && !is_excluded(path, exclude)
        {
            files.push(path.to_path_buf());
        }
    }

    files
}
