//! Typed error definitions for labelmv.
//! Covers the startup and per-manifest failure modes; per-row problems are
//! `processor::SkipReason` values, not errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for fatal initialization errors.
pub const EXIT_FATAL: i32 = 1;

/// Exit status under `--strict` when any row or manifest reported an error
/// (sysexits EX_DATAERR).
pub const EXIT_DATAERR: i32 = 65;

#[derive(Debug, Error)]
pub enum LabelMvError {
    #[error("You must specify at least one input file.")]
    NoInputFiles,

    #[error("Invalid {name} '{}': {reason}", path.display())]
    PrefixInvalid {
        name: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("Cannot parse config file {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Cannot open input file {}: {source}", path.display())]
    ManifestOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read input file {} at line {line}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl LabelMvError {
    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            LabelMvError::NoInputFiles => "no_input_files",
            LabelMvError::PrefixInvalid { .. } => "prefix_invalid",
            LabelMvError::ConfigParse { .. } => "config_parse",
            LabelMvError::ManifestOpen { .. } => "manifest_open",
            LabelMvError::ManifestRead { .. } => "manifest_read",
        }
    }
}
