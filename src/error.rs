//! Error types and result aliases for yamltidy.
//!
//! Per-file I/O failures are reported and skipped by the driver, never fatal
//! to the batch, so a single error type suffices:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
