//! YAML text normalization rules.
//!
//! Each rule is a total function over any string, organized into submodules:
//! - [`document_start`]: inserts the `---` document-start marker
//! - [`whitespace`]: strips trailing spaces and tabs from every line
//! - [`newline`]: enforces a final newline
//!
//! The rules are composed in that fixed order by
//! [`crate::process::normalize_content`].

pub mod document_start;
pub mod newline;
pub mod whitespace;

pub use document_start::{classify, insert_document_start, DocumentStart};
pub use newline::ensure_final_newline;
pub use whitespace::{strip_line, strip_trailing_whitespace};
