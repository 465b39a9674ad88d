//! Stage 6: copy every file to the destination, then to the backup, then
//! remove them all from the source. Each bulk step covers the whole file set
//! before the next starts; the first failure abandons the rest of the row.
//! In a dry run nothing is touched but every per-file line is still logged.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::fs_ops::{copy_into_dir, remove_source_file, EntryKind};

use super::checks::{list_source, ResolvedDirs};
use super::outcome::{SkipReason, TransferStep};

/// Re-list the source and move its regular files. Returns the file count.
pub(super) fn transfer(cfg: &Config, line: usize, dirs: &ResolvedDirs) -> Result<usize, SkipReason> {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut subdirs = 0;
    for entry in list_source(cfg, &dirs.source)? {
        match entry.kind {
            EntryKind::File => files.push(entry.path),
            EntryKind::Dir => subdirs += 1,
            EntryKind::Other => {
                warn!(
                    path = %entry.path.display(),
                    "line {line}: not a regular file, left in place"
                );
            }
        }
    }
    if files.is_empty() {
        return Err(SkipReason::NothingToTransfer {
            path: dirs.source.clone(),
            subdirs,
        });
    }

    info!(
        "line {line}: Executing file operations on {}.",
        dirs.source.display()
    );
    copy_all(&files, &dirs.dest, cfg.dry_run, TransferStep::CopyToDestination)?;
    copy_all(&files, &dirs.backup, cfg.dry_run, TransferStep::CopyToBackup)?;
    remove_all(&files, cfg.dry_run)?;
    Ok(files.len())
}

fn copy_all(files: &[PathBuf], dir: &Path, dry_run: bool, step: TransferStep) -> Result<(), SkipReason> {
    for file in files {
        info!(dry_run, "cp {} {}", file.display(), dir.display());
        if dry_run {
            continue;
        }
        copy_into_dir(file, dir).map_err(|e| SkipReason::TransferFailed {
            step,
            reason: format!("{e:#}"),
        })?;
    }
    Ok(())
}

fn remove_all(files: &[PathBuf], dry_run: bool) -> Result<(), SkipReason> {
    for file in files {
        info!(dry_run, "rm {}", file.display());
        if dry_run {
            continue;
        }
        remove_source_file(file).map_err(|e| SkipReason::TransferFailed {
            step: TransferStep::RemoveFromSource,
            reason: format!("{e:#}"),
        })?;
    }
    Ok(())
}
