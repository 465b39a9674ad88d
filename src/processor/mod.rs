//! Row processing.
//!
//! `RowProcessor` runs the validation stages of a manifest row in order
//! (fields, resolution, authorization, non-empty source, subdirectories) and
//! then the transfer. `run` drives every configured manifest through it.

mod checks;
mod outcome;
mod summary;
mod transfer;

pub use checks::ResolvedDirs;
pub use outcome::{Role, RowOutcome, SkipReason, Stage, TransferStep};
pub use summary::RunSummary;

use std::path::Path;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::errors::LabelMvError;
use crate::manifest::{ManifestLine, ManifestReader, Row};

/// Validates and transfers manifest rows under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct RowProcessor<'a> {
    cfg: &'a Config,
}

impl<'a> RowProcessor<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Process one row and log its outcome.
    pub fn process(&self, line: usize, row: Row) -> RowOutcome {
        let outcome = self.evaluate(line, row);
        report(line, &outcome);
        outcome
    }

    fn evaluate(&self, line: usize, row: Row) -> RowOutcome {
        let (source, dest, backup) = match row {
            Row::Blank => return skipped(Stage::Parsed, SkipReason::Blank),
            Row::Comment => return skipped(Stage::Parsed, SkipReason::Comment),
            Row::Malformed { fields } => {
                return skipped(Stage::Parsed, SkipReason::WrongFieldCount { found: fields });
            }
            Row::Triple {
                source,
                dest,
                backup,
            } => (source, dest, backup),
        };

        let mut stage = Stage::Parsed;
        match self.run_stages(line, &source, &dest, &backup, &mut stage) {
            Ok(outcome) => outcome,
            Err(reason) => skipped(stage, reason),
        }
    }

    fn run_stages(
        &self,
        line: usize,
        source: &str,
        dest: &str,
        backup: &str,
        stage: &mut Stage,
    ) -> Result<RowOutcome, SkipReason> {
        let fields = checks::require_fields(source, dest, backup)?;
        *stage = Stage::FieldsChecked;

        let dirs = checks::resolve_all(fields)?;
        *stage = Stage::PathsResolved;

        checks::authorize(self.cfg, &dirs)?;
        *stage = Stage::Authorized;

        checks::require_non_empty(self.cfg, &dirs.source)?;
        *stage = Stage::SourceNonEmpty;

        let subdirs = checks::subdirectories(self.cfg, &dirs.source)?;
        if !subdirs.is_empty() {
            error!(
                kind = "subdirectories",
                count = subdirs.len(),
                "line {line}: Source path contains subdirectories, they will not be transferred - {}",
                dirs.source.display()
            );
        }
        *stage = Stage::SubdirChecked;

        let files = transfer::transfer(self.cfg, line, &dirs)?;
        *stage = Stage::Transferred;

        Ok(RowOutcome::Transferred {
            files,
            subdirs: subdirs.len(),
        })
    }

    /// Process every row of one manifest, recording outcomes into `summary`.
    /// An unreadable manifest stops at the failing line; rows before it stand.
    pub fn process_manifest(
        &self,
        path: &Path,
        summary: &mut RunSummary,
    ) -> Result<(), LabelMvError> {
        info!("Processing input file: {}", path.display());
        let mut reader = ManifestReader::open(path)?;
        while let Some(item) = reader.next() {
            let ManifestLine { line, row } = item.map_err(|e| reader.read_error(path, e))?;
            let outcome = self.process(line, row);
            summary.record(&outcome);
        }
        Ok(())
    }
}

fn skipped(stage: Stage, reason: SkipReason) -> RowOutcome {
    RowOutcome::Skipped { stage, reason }
}

fn report(line: usize, outcome: &RowOutcome) {
    match outcome {
        RowOutcome::Transferred { files, .. } => {
            debug!(files = *files, "line {line}: transferred");
        }
        RowOutcome::Skipped {
            reason: SkipReason::Blank | SkipReason::Comment,
            ..
        } => {
            debug!("line {line} ignored.");
        }
        RowOutcome::Skipped { stage, reason } if reason.is_error() => {
            error!(kind = reason.kind(), stage = ?stage, "line {line}: {reason}");
        }
        RowOutcome::Skipped { stage, reason } => {
            debug!(kind = reason.kind(), stage = ?stage, "line {line}: {reason}");
        }
    }
}

/// Process every configured manifest in order. A manifest that cannot be
/// opened or read is logged and counted; the remaining ones still run.
pub fn run(cfg: &Config) -> RunSummary {
    if cfg.dry_run {
        warn!("This is a dry run, no changes will be made to the disk");
    }
    info!("Found input files:");
    for f in &cfg.input_files {
        info!("  {}", f.display());
    }

    let processor = RowProcessor::new(cfg);
    let mut summary = RunSummary::default();
    for path in &cfg.input_files {
        match processor.process_manifest(path, &mut summary) {
            Ok(()) => summary.manifests_processed += 1,
            Err(e) => {
                summary.manifests_failed += 1;
                error!(kind = e.kind(), "{e}");
            }
        }
    }

    info!(
        manifests = summary.manifests_processed,
        manifests_failed = summary.manifests_failed,
        transferred = summary.rows_transferred,
        skipped = summary.rows_skipped,
        failed = summary.rows_failed,
        files = summary.files_moved,
        dry_run = cfg.dry_run,
        "Run finished"
    );
    summary
}
