//! Validation stages run before a transfer.
//! Each stage returns `Result<_, SkipReason>` and performs no mutation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::fs_ops::{describe_io_error, list_children, ChildEntry, EntryKind};

use super::outcome::{Role, SkipReason};

/// The three manifest fields of a row, known to be non-empty.
#[derive(Debug, Clone, Copy)]
pub(super) struct RowFields<'a> {
    pub source: &'a str,
    pub dest: &'a str,
    pub backup: &'a str,
}

/// Canonical directories for a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirs {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub backup: PathBuf,
}

/// Stage 1: every field must be present.
pub(super) fn require_fields<'a>(
    source: &'a str,
    dest: &'a str,
    backup: &'a str,
) -> Result<RowFields<'a>, SkipReason> {
    if source.is_empty() || dest.is_empty() || backup.is_empty() {
        return Err(SkipReason::EmptyFields);
    }
    Ok(RowFields {
        source,
        dest,
        backup,
    })
}

/// Stage 2: resolve all three fields to existing, listable directories.
/// Relative paths resolve against the working directory.
pub(super) fn resolve_all(fields: RowFields<'_>) -> Result<ResolvedDirs, SkipReason> {
    let dirs = ResolvedDirs {
        source: resolve_dir(fields.source, Role::Source)?,
        dest: resolve_dir(fields.dest, Role::Destination)?,
        backup: resolve_dir(fields.backup, Role::Backup)?,
    };
    // Copying into the source and then deleting from it would destroy the files.
    if dirs.dest == dirs.source {
        return Err(SkipReason::SameAsSource {
            role: Role::Destination,
            path: dirs.dest,
        });
    }
    if dirs.backup == dirs.source {
        return Err(SkipReason::SameAsSource {
            role: Role::Backup,
            path: dirs.backup,
        });
    }
    Ok(dirs)
}

fn resolve_dir(raw: &str, role: Role) -> Result<PathBuf, SkipReason> {
    let path = Path::new(raw);
    let op = match role {
        Role::Source => "open source directory",
        Role::Destination => "open destination directory",
        Role::Backup => "open backup directory",
    };
    let unresolvable = |reason: String| SkipReason::Unresolvable { role, reason };

    let real = dunce::canonicalize(path).map_err(|e| unresolvable(describe_io_error(op, path, &e)))?;
    if !real.is_dir() {
        return Err(unresolvable(format!("{op} '{}': not a directory", path.display())));
    }
    fs::read_dir(&real).map_err(|e| unresolvable(describe_io_error(op, path, &e)))?;
    Ok(real)
}

/// Stage 3: each directory must be permitted by its prefix, checked in
/// source, destination, backup order.
pub(super) fn authorize(cfg: &Config, dirs: &ResolvedDirs) -> Result<(), SkipReason> {
    let checks = [
        (Role::Source, &cfg.source_prefix, &dirs.source),
        (Role::Destination, &cfg.dest_prefix, &dirs.dest),
        (Role::Backup, &cfg.backup_prefix, &dirs.backup),
    ];
    for (role, prefix, path) in checks {
        if !cfg.auth_mode.permits(prefix, path) {
            return Err(SkipReason::Forbidden {
                role,
                path: path.clone(),
            });
        }
    }
    Ok(())
}

/// List the source, mapping I/O failures to a skip.
pub(super) fn list_source(cfg: &Config, source: &Path) -> Result<Vec<ChildEntry>, SkipReason> {
    list_children(source, cfg.include_hidden).map_err(|e| SkipReason::SourceUnreadable {
        reason: describe_io_error("list", source, &e),
    })
}

/// Stage 4: the source must have at least one entry.
pub(super) fn require_non_empty(cfg: &Config, source: &Path) -> Result<(), SkipReason> {
    if list_source(cfg, source)?.is_empty() {
        return Err(SkipReason::EmptySource {
            path: source.to_path_buf(),
        });
    }
    Ok(())
}

/// Stage 5: subdirectories directly under the source. They are reported by
/// the caller and never transferred.
pub(super) fn subdirectories(cfg: &Config, source: &Path) -> Result<Vec<PathBuf>, SkipReason> {
    Ok(list_source(cfg, source)?
        .into_iter()
        .filter(|e| e.kind == EntryKind::Dir)
        .map(|e| e.path)
        .collect())
}
