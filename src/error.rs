//! Error types for dropping the kernel caches

use std::{io, path::PathBuf, process::ExitCode};

use thiserror::Error;

/// Generic failure exit code, `-1` truncated to 8 bits
pub const GENERIC_FAILURE: u8 = 255;

#[derive(Debug, Error)]
pub enum DropCachesError {
    #[error("Failed to open cache control {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write cache control {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Short write to cache control {}: wrote {written} of 1 bytes", .path.display())]
    ShortWrite { path: PathBuf, written: usize },
}

impl DropCachesError {
    /// The process exit code for this failure
    ///
    /// An open failure surfaces the OS error number unmodified. Write failures
    /// collapse to [`GENERIC_FAILURE`].
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Open { source, .. } => source
                .raw_os_error()
                .and_then(|errno| u8::try_from(errno).ok())
                .filter(|errno| *errno != 0)
                .unwrap_or(GENERIC_FAILURE),
            Self::Write { .. } | Self::ShortWrite { .. } => GENERIC_FAILURE,
        }
    }
}

impl From<DropCachesError> for ExitCode {
    fn from(err: DropCachesError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, DropCachesError>;
