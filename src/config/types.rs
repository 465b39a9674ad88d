//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - AuthMode selects how resolved paths are checked against the prefixes.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::PREFIX_DEFAULT;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Adds skip notices for ignored lines and empty sources
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// How a resolved directory is matched against its configured prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// The prefix must be the path itself or one of its ancestors,
    /// compared component by component.
    #[default]
    Ancestor,
    /// Legacy rule: the prefix text only has to occur somewhere in the path.
    /// `/data/src-evil` passes for `/data/src`.
    Substring,
}

impl AuthMode {
    /// True when `resolved` is permitted under `prefix`.
    pub fn permits(self, prefix: &Path, resolved: &Path) -> bool {
        match self {
            AuthMode::Ancestor => resolved.starts_with(prefix),
            AuthMode::Substring => resolved
                .to_string_lossy()
                .contains(prefix.to_string_lossy().as_ref()),
        }
    }
}

/// Runtime configuration used by the row processor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Required prefix for source directories
    pub source_prefix: PathBuf,
    /// Required prefix for destination directories
    pub dest_prefix: PathBuf,
    /// Required prefix for backup directories
    pub backup_prefix: PathBuf,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, log actions but do not modify the filesystem
    pub dry_run: bool,
    pub auth_mode: AuthMode,
    /// Transfer dot-files too
    pub include_hidden: bool,
    /// Reflect per-row errors in the exit status
    pub strict: bool,
    /// Manifests to process, in order
    pub input_files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_prefix: PathBuf::from(PREFIX_DEFAULT),
            dest_prefix: PathBuf::from(PREFIX_DEFAULT),
            backup_prefix: PathBuf::from(PREFIX_DEFAULT),
            log_level: LogLevel::Normal,
            log_file: None,
            dry_run: false,
            auth_mode: AuthMode::Ancestor,
            include_hidden: false,
            strict: false,
            input_files: Vec::new(),
        }
    }
}

impl Config {
    /// Construct a Config with explicit prefixes; other fields use defaults.
    pub fn new(
        source_prefix: impl Into<PathBuf>,
        dest_prefix: impl Into<PathBuf>,
        backup_prefix: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_prefix: source_prefix.into(),
            dest_prefix: dest_prefix.into(),
            backup_prefix: backup_prefix.into(),
            ..Default::default()
        }
    }
}
