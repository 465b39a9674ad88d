//! Core library for `labelmv`.
//!
//! Reads CSV manifests whose rows name a source, a destination and a backup
//! directory. For every valid row the regular files directly inside the source
//! are copied to the destination and the backup, then removed from the source.
//! Rows that fail validation or prefix authorization are logged and skipped.
//!
//! Layout:
//! - `config`: `Config`, prefixes, XML loading, validation
//! - `manifest`: line classification and the manifest reader
//! - `processor`: per-row stages, transfer, and the run loop
//! - `fs_ops`: copy/remove/listing primitives

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod manifest;
pub mod output;
pub mod platform;
pub mod processor;

pub use config::{
    default_config_path, load_config_from_xml, path_has_symlink_ancestor, validate_and_normalize,
    AuthMode, Config, LogLevel,
};
pub use errors::LabelMvError;
pub use manifest::{parse_line, ManifestLine, ManifestReader, Row};
pub use processor::{run, RowOutcome, RowProcessor, RunSummary, SkipReason, Stage};

/// Convenience re-exports for binaries and tests.
pub mod prelude {
    pub use crate::config::{AuthMode, Config, LogLevel};
    pub use crate::errors::LabelMvError as Error;
    pub use crate::manifest::{ManifestReader, Row};
    pub use crate::processor::{run, RowOutcome, RowProcessor, RunSummary, SkipReason, Stage};
}
