//! Config validation logic.
//! Verifies that every prefix is an existing, readable directory and
//! canonicalizes it in place, and that at least one manifest was given.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::LabelMvError;

use super::types::Config;

/// Validate the config and replace each prefix with its canonical form.
/// Rows are resolved to canonical paths too, so both sides compare like for like.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<()> {
    if cfg.input_files.is_empty() {
        return Err(LabelMvError::NoInputFiles.into());
    }
    cfg.source_prefix = resolve_prefix(&cfg.source_prefix, "source_prefix")?;
    cfg.dest_prefix = resolve_prefix(&cfg.dest_prefix, "dest_prefix")?;
    cfg.backup_prefix = resolve_prefix(&cfg.backup_prefix, "backup_prefix")?;

    info!(
        "Config validated: source_prefix='{}' dest_prefix='{}' backup_prefix='{}' mode={:?}",
        cfg.source_prefix.display(),
        cfg.dest_prefix.display(),
        cfg.backup_prefix.display(),
        cfg.auth_mode
    );
    Ok(())
}

/// Canonicalize a prefix; it must be a directory we can list.
fn resolve_prefix(path: &Path, name: &'static str) -> Result<PathBuf, LabelMvError> {
    let invalid = |reason: String| LabelMvError::PrefixInvalid {
        name,
        path: path.to_path_buf(),
        reason,
    };
    let real = dunce::canonicalize(path).map_err(|e| invalid(e.to_string()))?;
    if !real.is_dir() {
        return Err(invalid("not a directory".into()));
    }
    fs::read_dir(&real).map_err(|e| invalid(format!("cannot list directory: {e}")))?;
    debug!("{name} readable: {}", real.display());
    Ok(real)
}
