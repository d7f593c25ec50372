//! Per-file normalization pipeline.
//!
//! Composes the rewrite rules in a fixed order:
//!
//! 1. Insert the `---` document-start marker
//! 2. Strip trailing whitespace from every line
//! 3. Enforce a final newline
//!
//! The order is fixed for reproducibility; the rules operate on different
//! axes of the text, so their composition is idempotent. [`normalize_content`]
//! is the pure entry point; [`fix_file`] wraps it in the per-file
//! read-rewrite cycle used by the driver.

pub mod pipeline;

pub use pipeline::{fix_file, normalize_content};
