//! Script loading errors.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading a script.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while reading file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Which class of failure this is.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::Open { .. } => LoadErrorKind::Open,
            Self::Read { .. } => LoadErrorKind::Read,
        }
    }

    /// The file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Class of a load failure, without the underlying I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The file could not be opened (missing, permissions, invalid path)
    Open,
    /// An I/O failure while reading an opened file
    Read,
}
