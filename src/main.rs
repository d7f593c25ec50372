//! yamltidy - Batch normalizer for YAML manifests

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::path::PathBuf;

use glob::Pattern;
use yamltidy::process::fix_file;
use yamltidy::{discover_files, parse_args, CliArgs, Config, Result};

/// Directory scanned when no roots are given on the command line
const DEFAULT_ROOT: &str = "./gitops";

fn main() -> Result<()> {
    let args = parse_args();
    let config = build_config(&args)?;

    let files = collect_files(&args, &config);
    if files.is_empty() {
        if !args.silent {
            eprintln!("No YAML files found to fix.");
        }
        return Ok(());
    }

    process_files(&files, &config, &args);
    Ok(())
}

/// Build configuration from CLI args and optional config file
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        // Explicit config file specified
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        // Auto-discover config files from the working directory upwards
        let cwd = std::env::current_dir().unwrap_or_default();
        if args.debug {
            let discovered = Config::discover_config_files(&cwd);
            if discovered.is_empty() {
                eprintln!("[DEBUG] No config files discovered");
            } else {
                eprintln!("[DEBUG] Discovered config files:");
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&cwd)
    };

    // Override with CLI arguments
    if args.no_document_start {
        config.document_start = false;
    }
    if args.no_trailing_whitespace {
        config.strip_trailing_whitespace = false;
    }
    if args.no_final_newline {
        config.ensure_final_newline = false;
    }
    config
        .exclude
        .extend(args.exclude.iter().cloned());

    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    eprintln!("[DEBUG]   document_start: {}", config.document_start);
    eprintln!(
        "[DEBUG]   strip_trailing_whitespace: {}",
        config.strip_trailing_whitespace
    );
    eprintln!(
        "[DEBUG]   ensure_final_newline: {}",
        config.ensure_final_newline
    );
    if !config.exclude.is_empty() {
        eprintln!("[DEBUG]   exclude: {:?}", config.exclude);
    }
}

/// Collect all YAML files under the requested roots
fn collect_files(args: &CliArgs, config: &Config) -> Vec<PathBuf> {
    // Compile exclude patterns (validated in build_config)
    let exclude_patterns: Vec<Pattern> = config
        .exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    let roots: Vec<PathBuf> = if args.roots.is_empty() {
        vec![PathBuf::from(DEFAULT_ROOT)]
    } else {
        args.roots.clone()
    };

    let mut files = Vec::new();
    for root in &roots {
        files.extend(discover_files(root, &args.extensions, &exclude_patterns));
    }
    files
}

/// Process files strictly sequentially, one read-rewrite cycle at a time.
///
/// A failure on one file is reported and never aborts the rest of the batch;
/// every discovered file is attempted and the process always completes.
fn process_files(files: &[PathBuf], config: &Config, args: &CliArgs) {
    for path in files {
        match fix_file(path, config, args.dry_run) {
            Ok(changed) => {
                if args.silent {
                    continue;
                }
                if args.dry_run {
                    if changed {
                        println!("Would fix: {}", path.display());
                    }
                } else {
                    println!("Fixed: {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("Error fixing {}: {e}", path.display());
            }
        }
    }
}
