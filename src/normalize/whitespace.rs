//! Trailing-whitespace removal.
//!
//! Strips the maximal run of space and tab characters before each line end.
//! Implemented as an explicit per-line suffix scan rather than a multiline
//! regex; the newline itself is never consumed, and leading or interior
//! whitespace is untouched.

/// Strip trailing spaces and tabs from a single line (newline excluded).
#[must_use]
pub fn strip_line(line: &str) -> &str {
    line.trim_end_matches([' ', '\t'])
}

/// Strip trailing spaces and tabs from every line of a document.
///
/// Line structure is preserved exactly: the number of lines and every
/// newline position survive, only horizontal whitespace before each line
/// end is removed.
#[must_use]
pub fn strip_trailing_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(strip_line(line));
    }
    out
}
