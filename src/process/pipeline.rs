//! Rule composition and the per-file read-rewrite cycle.

use std::path::Path;

use crate::config::Config;
use crate::normalize::{ensure_final_newline, insert_document_start, strip_trailing_whitespace};
use crate::Result;

/// Normalize one document's text according to the configured rules.
///
/// Pure string transformation with no intrinsic error conditions; applying
/// it twice yields the same result as applying it once.
#[must_use]
pub fn normalize_content(input: &str, config: &Config) -> String {
    let mut text = if config.document_start {
        insert_document_start(input)
    } else {
        input.to_string()
    };
    if config.strip_trailing_whitespace {
        text = strip_trailing_whitespace(&text);
    }
    if config.ensure_final_newline {
        text = ensure_final_newline(&text);
    }
    text
}

/// Read, normalize and rewrite a single file in place.
///
/// Returns whether the content changed. With `dry_run` the file is left
/// untouched. Failures from reading (missing file, permissions, invalid
/// UTF-8) or from writing propagate to the caller; a file that cannot be
/// rewritten keeps its original content, there is no partial write.
pub fn fix_file(path: &Path, config: &Config, dry_run: bool) -> Result<bool> {
    let contents = std::fs::read_to_string(path)?;
    let fixed = normalize_content(&contents, config);
    let changed = fixed != contents;
    if !dry_run {
        std::fs::write(path, fixed)?;
    }
    Ok(changed)
}
