//! Filesystem primitives for the transfer step.

mod atomic;
mod copy;
pub mod helpers;
mod io_copy;
mod listing;
mod util;

pub use copy::{copy_into_dir, remove_source_file, safe_copy_and_rename};
pub use helpers::{describe_io_error, io_error_with_help};
pub use listing::{list_children, ChildEntry, EntryKind};
pub use util::TEMP_PREFIX;
