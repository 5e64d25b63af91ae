//! Error types for [`crate::ConfigStore`] file operations.

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Error returned by [`crate::ConfigStore::load`].
///
/// When a load fails the store keeps the sections it had before the call.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read (missing, permission denied, …).
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid UTF-8.
    #[error("config at {path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl LoadError {
    /// The path the failed load was reading.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Encoding { path, .. } => path.as_path(),
        }
    }
}

/// Error returned by [`crate::ConfigStore::save`].
///
/// A failed save may leave a truncated or partially written file behind.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The file could not be created, written or flushed.
    #[error("I/O error writing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// The path the failed save was writing.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path.as_path(),
        }
    }
}
