//! Command-line interface for yamltidy.
//!
//! Defines CLI arguments using clap builder API. Running with no arguments
//! reproduces the classic behavior: fix every YAML file under `./gitops`
//! with all rules enabled.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Directories to scan for YAML files
    pub roots: Vec<PathBuf>,

    /// Explicit config file path (overrides auto-discovery)
    pub config: Option<PathBuf>,

    /// Exclude patterns for files/directories (glob patterns)
    pub exclude: Vec<String>,

    /// Extra YAML file extensions (in addition to yaml/yml)
    pub extensions: Vec<String>,

    /// Report files that would change without rewriting them
    pub dry_run: bool,

    /// Disable document-start marker insertion
    pub no_document_start: bool,

    /// Disable trailing-whitespace stripping
    pub no_trailing_whitespace: bool,

    /// Disable final-newline enforcement
    pub no_final_newline: bool,

    /// Enable debug output
    pub debug: bool,

    /// Silent mode (per-file notices suppressed)
    pub silent: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("yamltidy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize YAML manifests in place: document-start markers, trailing whitespace, final newlines")
        .arg(
            Arg::new("roots")
                .help("Directories to scan recursively [default: ./gitops]")
                .value_name("DIR")
                .num_args(1..)
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .help("Exclude files/directories matching pattern (glob syntax, can be repeated)")
                .value_name("PATTERN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("extension")
                .short('x')
                .long("extension")
                .help("Additional YAML file extension (can be repeated, e.g., -x yaml.tpl)")
                .value_name("EXT")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dry-run")
                .short('n')
                .long("dry-run")
                .help("Report files that would change; do not rewrite anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-document-start")
                .long("no-document-start")
                .help("Do not insert --- document-start markers")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-trailing-whitespace")
                .long("no-trailing-whitespace")
                .help("Do not strip trailing whitespace")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-final-newline")
                .long("no-final-newline")
                .help("Do not enforce a final newline")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config discovery and final settings)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (suppress per-file notices)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        roots: matches
            .get_many::<PathBuf>("roots")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        exclude: matches
            .get_many::<String>("exclude")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        extensions: matches
            .get_many::<String>("extension")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        dry_run: matches.get_flag("dry-run"),
        no_document_start: matches.get_flag("no-document-start"),
        no_trailing_whitespace: matches.get_flag("no-trailing-whitespace"),
        no_final_newline: matches.get_flag("no-final-newline"),
        debug: matches.get_flag("debug"),
        silent: matches.get_flag("silent"),
    }
}
