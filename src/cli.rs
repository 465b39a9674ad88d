//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over --log-level.
//! - The input list is checked during config validation, not by clap, so a
//!   missing list is reported like every other initialization error.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{AuthMode, Config, LogLevel};

/// Move the files listed in manifests into destination and backup directories.
/// CLI flags override config file values.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy each file of a source directory into destination and backup directories, then remove it from the source"
)]
pub struct Args {
    /// Manifest files: one `source,destination,backup` row per line.
    #[arg(value_name = "FILES", value_hint = ValueHint::FilePath)]
    pub input_files: Vec<PathBuf>,

    /// Turn debug mode on (equivalent to `--log-level debug`).
    #[arg(short = 'v', long, help = "Turn debug mode on (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    #[arg(
        short = 's',
        long,
        value_name = "SOURCEDIR",
        value_hint = ValueHint::DirPath,
        help = "Base path for source directories [default: /]"
    )]
    pub source_prefix: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        value_name = "DESTDIR",
        value_hint = ValueHint::DirPath,
        help = "Base path for destination directories [default: /]"
    )]
    pub dest_prefix: Option<PathBuf>,

    #[arg(
        short = 'b',
        long,
        value_name = "BKPDIR",
        value_hint = ValueHint::DirPath,
        help = "Base path for backup directories [default: /]"
    )]
    pub backup_prefix: Option<PathBuf>,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        short = 'n',
        long,
        help = "Perform a test run with no real changes made to disk"
    )]
    pub dry_run: bool,

    #[arg(
        long,
        help = "Accept a path when the prefix text occurs anywhere in it (legacy check)"
    )]
    pub substring_match: bool,

    #[arg(long, help = "Also transfer files whose name starts with '.'")]
    pub include_hidden: bool,

    #[arg(long, help = "Exit with status 65 when any row or input file reported an error")]
    pub strict: bool,

    #[arg(long, value_hint = ValueHint::FilePath, help = "Also append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where labelmv will look for the config file (or LABELMV_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by labelmv and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(p) = &self.source_prefix {
            cfg.source_prefix = p.clone();
        }
        if let Some(p) = &self.dest_prefix {
            cfg.dest_prefix = p.clone();
        }
        if let Some(p) = &self.backup_prefix {
            cfg.backup_prefix = p.clone();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.substring_match {
            cfg.auth_mode = AuthMode::Substring;
        }
        if self.include_hidden {
            cfg.include_hidden = true;
        }
        if self.strict {
            cfg.strict = true;
        }
        cfg.input_files = self.input_files.clone();
    }
}

pub fn parse() -> Args {
    Args::parse()
}
