//! I/O helper utilities.
//!
//! Enriches io::Error with the failed operation, the path, and a platform-aware hint.
//!
//! Usage:
//!   fs::remove_file(p).map_err(io_error_with_help("remove source file", p))?;
//!   let reason = describe_io_error("open source directory", dir, &e);

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and permissions"),
            libc::ENOENT => Some("path not found; verify it exists"),
            libc::ENOTDIR => Some("a path component is not a directory"),
            libc::EISDIR => Some("is a directory; only regular files are transferred"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            libc::EMFILE | libc::ENFILE => Some("too many open files"),
            _ => None,
        };
    }
    #[cfg(windows)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            5 => Some("access denied; check permissions"),
            2 | 3 => Some("path not found; verify it exists"),
            32 => Some("sharing violation; file is in use"),
            112 => Some("insufficient disk space"),
            19 => Some("write protected / read-only media"),
            206 => Some("filename or path too long"),
            _ => None,
        };
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        _ => None,
    }
}

/// Human-friendly "<op> '<path>': <error>[ (<hint>)]" message.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    msg
}

/// Returns a closure for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(describe_io_error(op, path, &e))
}
