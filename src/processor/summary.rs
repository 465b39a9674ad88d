use crate::errors::EXIT_DATAERR;

use super::outcome::RowOutcome;

/// Aggregate counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub manifests_processed: usize,
    pub manifests_failed: usize,
    pub rows_transferred: usize,
    /// Blank lines and comments
    pub rows_ignored: usize,
    /// Skipped with a notice (empty source and similar)
    pub rows_skipped: usize,
    /// Rejected with an error
    pub rows_failed: usize,
    /// Transferred rows whose source also held subdirectories
    pub rows_with_subdirs: usize,
    pub files_moved: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Transferred { files, subdirs } => {
                self.rows_transferred += 1;
                self.files_moved += files;
                if *subdirs > 0 {
                    self.rows_with_subdirs += 1;
                }
            }
            RowOutcome::Skipped { reason, .. } => {
                use super::outcome::SkipReason::{Blank, Comment, NothingToTransfer};
                if let NothingToTransfer { subdirs, .. } = reason
                    && *subdirs > 0
                {
                    self.rows_with_subdirs += 1;
                }
                if matches!(reason, Blank | Comment) {
                    self.rows_ignored += 1;
                } else if reason.is_error() {
                    self.rows_failed += 1;
                } else {
                    self.rows_skipped += 1;
                }
            }
        }
    }

    /// Any error line was logged: a rejected row, a subdirectory report, or
    /// an unreadable manifest.
    pub fn has_errors(&self) -> bool {
        self.rows_failed > 0 || self.rows_with_subdirs > 0 || self.manifests_failed > 0
    }

    /// Process exit status. Errors only count when `strict` is set.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.has_errors() {
            EXIT_DATAERR
        } else {
            0
        }
    }
}
