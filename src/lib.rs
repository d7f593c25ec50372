//! yamltidy - Batch normalizer for YAML manifests
//!
//! Walks a directory tree, collects `*.yaml`/`*.yml` files and rewrites each
//! one in place so that the document starts with a `---` marker, no line ends
//! in trailing whitespace, and the file ends with a final newline.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod normalize;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use discover::{discover_files, is_yaml_file};
pub use error::Result;
pub use process::{fix_file, normalize_content};
