//! Per-row outcome types.
//!
//! Every validation stage returns `Result<_, SkipReason>`; the first `Err`
//! ends the row. `RowOutcome` records where the row stopped and why.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the three manifest fields a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Source,
    Destination,
    Backup,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Source => "Source",
            Role::Destination => "Destination",
            Role::Backup => "Backup",
        })
    }
}

/// Last stage a row passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Parsed,
    FieldsChecked,
    PathsResolved,
    Authorized,
    SourceNonEmpty,
    SubdirChecked,
    Transferred,
}

/// Bulk operation of the transfer stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStep {
    CopyToDestination,
    CopyToBackup,
    RemoveFromSource,
}

impl fmt::Display for TransferStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferStep::CopyToDestination => "copy to destination",
            TransferStep::CopyToBackup => "copy to backup",
            TransferStep::RemoveFromSource => "remove from source",
        })
    }
}

/// Why a row did not reach `Transferred`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("blank line")]
    Blank,

    #[error("comment")]
    Comment,

    #[error("wrong number of fields (found {found}), skipping. Check your paths for commas!")]
    WrongFieldCount { found: usize },

    #[error("Empty field(s), skipping")]
    EmptyFields,

    #[error("{reason}, skipping")]
    Unresolvable { role: Role, reason: String },

    #[error("{role} directory is the source directory, skipping - {}", path.display())]
    SameAsSource { role: Role, path: PathBuf },

    #[error("{role} path forbidden, skipping - {}", path.display())]
    Forbidden { role: Role, path: PathBuf },

    #[error("Source directory is empty, skipping - {}", path.display())]
    EmptySource { path: PathBuf },

    #[error("Cannot list source directory, skipping - {reason}")]
    SourceUnreadable { reason: String },

    #[error("Source directory holds no regular files, skipping - {}", path.display())]
    NothingToTransfer {
        path: PathBuf,
        /// Subdirectories seen in the same listing, already reported as an error
        subdirs: usize,
    },

    #[error("{step} failed, abandoning row - {reason}")]
    TransferFailed { step: TransferStep, reason: String },
}

impl SkipReason {
    /// Errors are always logged; the rest are notices shown only in debug mode.
    pub fn is_error(&self) -> bool {
        !matches!(
            self,
            SkipReason::Blank
                | SkipReason::Comment
                | SkipReason::EmptySource { .. }
                | SkipReason::NothingToTransfer { .. }
        )
    }

    /// Short machine-friendly kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::Blank => "blank",
            SkipReason::Comment => "comment",
            SkipReason::WrongFieldCount { .. } => "wrong_field_count",
            SkipReason::EmptyFields => "empty_fields",
            SkipReason::Unresolvable { .. } => "unresolvable",
            SkipReason::SameAsSource { .. } => "same_as_source",
            SkipReason::Forbidden { .. } => "forbidden",
            SkipReason::EmptySource { .. } => "empty_source",
            SkipReason::SourceUnreadable { .. } => "source_unreadable",
            SkipReason::NothingToTransfer { .. } => "nothing_to_transfer",
            SkipReason::TransferFailed { .. } => "transfer_failed",
        }
    }
}

/// Terminal state of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Transferred {
        /// Regular files moved (or that would be, in a dry run)
        files: usize,
        /// Subdirectories found in the source and left behind
        subdirs: usize,
    },
    Skipped { stage: Stage, reason: SkipReason },
}

impl RowOutcome {
    pub fn is_transferred(&self) -> bool {
        matches!(self, RowOutcome::Transferred { .. })
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            RowOutcome::Skipped { reason, .. } => Some(reason),
            RowOutcome::Transferred { .. } => None,
        }
    }
}
