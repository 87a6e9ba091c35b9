//! Miscellaneous OS utilities

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::{DropCachesError, Result},
    DropLevel,
};

/// The kernel's cache control file
///
/// See https://www.kernel.org/doc/Documentation/sysctl/vm.txt
pub const CONTROL_PATH: &str = "/proc/sys/vm/drop_caches";

/// Drops the OS page cache
///
/// Only clean page cache pages are reclaimed, slab objects are left alone.
/// This affects every process on the host and needs root (or a setuid binary).
pub fn drop_caches() -> Result<()> {
    drop_caches_at(CONTROL_PATH, DropLevel::PageCache)
}

/// Writes `level` to the control file at `path`
///
/// The file must already exist, it is never created or truncated. Exactly one
/// open and one write are attempted.
pub fn drop_caches_at(path: impl AsRef<Path>, level: DropLevel) -> Result<()> {
    let path = path.as_ref();
    let _span = tracing::info_span!("drop_caches", path = %path.display(), %level).entered();

    let mut control = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| {
            tracing::warn!(error = %source, "open failed");
            DropCachesError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
    tracing::debug!("opened cache control");

    write_control(&mut control, level, path)?;
    tracing::debug!("cache drop requested");
    Ok(())
}

/// Issues a single write of the control byte for `level`
///
/// A short write is a failure, it is never retried.
pub fn write_control<W: Write>(control: &mut W, level: DropLevel, path: &Path) -> Result<()> {
    let written = control.write(&[level.control_byte()]).map_err(|source| {
        tracing::warn!(error = %source, "write failed");
        DropCachesError::Write {
            path: PathBuf::from(path),
            source,
        }
    })?;
    if written != 1 {
        tracing::warn!(written, "short write");
        return Err(DropCachesError::ShortWrite {
            path: PathBuf::from(path),
            written,
        });
    }
    Ok(())
}
