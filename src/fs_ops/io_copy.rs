//! Streaming copy into a fresh file.
//!
//! - The destination is created with `create_new(true)`, so an existing file is never clobbered here;
//!   replacing the final name is the job of the rename that follows.
//! - Buffered I/O with 1 MiB buffers.
//! - The destination is fsynced before returning.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes appended
//! concurrently after EOF is reached are not included.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` and fsync `dst`. Returns the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;

    let dst_f = writer.into_inner().map_err(|e| e.into_error())?;
    dst_f.sync_all()?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn copies_bytes_and_reports_length() {
        let td = tempdir().unwrap();
        let src = td.path().join("in.bin");
        let dst = td.path().join("out.bin");
        fs::write(&src, b"0123456789").unwrap();
        let n = copy_streaming(&src, &dst).unwrap();
        assert_eq!(n, 10);
        assert_eq!(fs::read(&dst).unwrap(), b"0123456789");
    }

    #[test]
    fn refuses_existing_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("in.bin");
        let dst = td.path().join("out.bin");
        fs::write(&src, b"new").unwrap();
        fs::write(&dst, b"old").unwrap();
        let err = copy_streaming(&src, &dst).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&dst).unwrap(), b"old");
    }
}
