//! Configuration management for yamltidy.
//!
//! This module provides the [`Config`] struct which controls the rewrite
//! rules. Configuration can be loaded from:
//! - TOML files (`yamltidy.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! working directory up to the filesystem root, plus the user's home
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["yamltidy.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_true() -> bool {
    true
}

/// Main configuration struct for yamltidy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Insert a `---` document-start marker where missing (default: true)
    #[serde(default = "default_true")]
    pub document_start: bool,

    /// Strip trailing spaces and tabs from every line (default: true)
    #[serde(default = "default_true")]
    pub strip_trailing_whitespace: bool,

    /// Append a final newline when the file lacks one (default: true)
    #[serde(default = "default_true")]
    pub ensure_final_newline: bool,

    /// Glob patterns for files and directories to skip
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_start: true,
            strip_trailing_whitespace: true,
            ensure_final_newline: true,
            exclude: Vec::new(),
        }
    }
}

/// Partial configuration where every field is optional
///
/// Used when loading TOML files so that only explicitly set values override
/// the defaults (or earlier, less specific config files).
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    document_start: Option<bool>,
    strip_trailing_whitespace: Option<bool>,
    ensure_final_newline: Option<bool>,
    #[serde(default)]
    exclude: Vec<String>,
}

impl Config {
    /// Validate configuration values
    ///
    /// Returns a description of the first problem found, or `None` if the
    /// configuration is valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        for pattern in &self.exclude {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Some(format!("invalid exclude pattern '{pattern}': {e}"));
            }
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.document_start {
            self.document_start = v;
        }
        if let Some(v) = partial.strip_trailing_whitespace {
            self.strip_trailing_whitespace = v;
        }
        if let Some(v) = partial.ensure_final_newline {
            self.ensure_final_newline = v;
        }
        // Exclude patterns accumulate across config files
        for pattern in &partial.exclude {
            if !self.exclude.contains(pattern) {
                self.exclude.push(pattern.clone());
            }
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the path's directory up to the root, then adds the home
    /// directory config. Returns config file paths in order of priority
    /// (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the path's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}
