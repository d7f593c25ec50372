//! Document-start marker insertion.
//!
//! Every YAML document should open with a `---` marker line. The input is
//! classified by its very start into one of three cases:
//! - already marked: left unchanged
//! - leading comment block: the marker is spliced in after the block
//! - anything else: the marker is prepended
//!
//! A line counts as a comment when its first character is `#`, even inside
//! what a YAML parser would read as a quoted scalar. Blank lines (empty or
//! whitespace-only) extend a leading comment block.

/// How a document relates to the `---` marker, judged from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStart {
    /// Text already begins with the literal `---`
    Present,
    /// Text begins with a comment; the marker belongs after the comment block
    AfterComments,
    /// The marker must be prepended
    Missing,
}

/// Classify a document by inspecting only the start of the text.
///
/// An empty document is [`DocumentStart::Missing`].
#[must_use]
pub fn classify(text: &str) -> DocumentStart {
    if text.starts_with("---") {
        DocumentStart::Present
    } else if text.starts_with('#') {
        DocumentStart::AfterComments
    } else {
        DocumentStart::Missing
    }
}

/// Length of the maximal leading run of comment or blank lines.
fn leading_comment_run(lines: &[&str]) -> usize {
    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx];
        if line.starts_with('#') || line.trim().is_empty() {
            idx += 1;
        } else {
            break;
        }
    }
    idx
}

/// Ensure the document begins with a `---` marker line.
///
/// For a leading comment block the marker is inserted immediately after the
/// block, before the first non-comment, non-empty line; a document made up
/// entirely of comments and blank lines gets the marker appended after all of
/// them. If that first content line is already a marker, nothing is inserted,
/// so repeated application is stable. An empty input becomes `---\n`.
#[must_use]
pub fn insert_document_start(text: &str) -> String {
    match classify(text) {
        DocumentStart::Present => text.to_string(),
        DocumentStart::AfterComments => {
            let lines: Vec<&str> = text.split('\n').collect();
            let run = leading_comment_run(&lines);
            if lines.get(run).is_some_and(|line| line.starts_with("---")) {
                return text.to_string();
            }
            let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
            out.extend_from_slice(&lines[..run]);
            out.push("---");
            out.extend_from_slice(&lines[run..]);
            out.join("\n")
        }
        DocumentStart::Missing => format!("---\n{text}"),
    }
}
