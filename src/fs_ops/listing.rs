//! Direct-children listing of a source directory.
//! - Depth 1 only, sorted by file name so runs are reproducible.
//! - Symlinks are classified by their target; a dangling link is `Other`.
//! - Dot-entries are skipped unless `include_hidden`; our own temp files always are.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::util::TEMP_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, fifos, devices, dangling links
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// List the direct children of `dir`.
pub fn list_children(dir: &Path, include_hidden: bool) -> io::Result<Vec<ChildEntry>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy();
        if name.starts_with(TEMP_PREFIX) || (!include_hidden && name.starts_with('.')) {
            continue;
        }

        let ftype = entry.file_type();
        let kind = if ftype.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(m) if m.is_file() => EntryKind::File,
                Ok(m) if m.is_dir() => EntryKind::Dir,
                _ => EntryKind::Other,
            }
        } else if ftype.is_file() {
            EntryKind::File
        } else if ftype.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::Other
        };

        out.push(ChildEntry {
            path: entry.into_path(),
            kind,
        });
    }
    Ok(out)
}
