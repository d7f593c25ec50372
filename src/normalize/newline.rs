//! Final-newline enforcement.

/// Append a trailing newline if the text lacks one.
///
/// Existing trailing newlines, including runs of blank lines at the end of
/// the document, are preserved untouched; only the single-missing-newline
/// case is corrected.
#[must_use]
pub fn ensure_final_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        let mut out = String::with_capacity(text.len() + 1);
        out.push_str(text);
        out.push('\n');
        out
    }
}
