//! Copy and remove primitives used by the transfer step.
//! - Copies go to a temp file in the target directory, are fsynced, then renamed
//!   over the final name. An existing file of the same name is replaced.
//! - A failed copy removes its temp file; the final name is never left truncated.

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;
use super::{io_copy, util};

/// Copy `src` to `dest` through a temp file in `dest`'s directory.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    let tmp_path = util::unique_temp_path(dest_dir);

    if let Err(e) = io_copy::copy_streaming(src, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error_with_help("copy", src)(e))
            .with_context(|| format!("copy into '{}'", dest_dir.display()));
    }

    if let Err(e) = try_atomic_move(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp_path.display(),
                dest.display()
            )
        });
    }

    Ok(())
}

/// Copy `file` into directory `dir` under its own file name. Returns the new path.
pub fn copy_into_dir(file: &Path, dir: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| anyhow!("source file missing a file name: {}", file.display()))?;
    let dest = dir.join(name);
    safe_copy_and_rename(file, &dest)?;
    Ok(dest)
}

/// Remove a transferred file from its source directory.
pub fn remove_source_file(file: &Path) -> Result<()> {
    fs::remove_file(file).map_err(io_error_with_help("remove source file", file))
}
