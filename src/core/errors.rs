//! CSL-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, CslError>;

/// Top-level error type for checksymlinks.
///
/// Every variant here is fatal: it aborts the run with a nonzero exit.
/// Recoverable conditions (a link target that cannot be resolved, a removal
/// that fails) are counted and logged by the walk instead of surfacing here.
#[derive(Debug, Error)]
pub enum CslError {
    #[error("[CSL-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[CSL-1002] root path {path} does not exist")]
    RootMissing { path: PathBuf },

    #[error("[CSL-1003] could not change into root directory {path}: {source}")]
    ChdirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[CSL-2001] failure accessing {path} while walking the tree: {source}")]
    WalkAborted {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[CSL-2002] could not stat {path}: {source}")]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[CSL-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CslError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "CSL-1001",
            Self::RootMissing { .. } => "CSL-1002",
            Self::ChdirFailed { .. } => "CSL-1003",
            Self::WalkAborted { .. } => "CSL-2001",
            Self::StatFailed { .. } => "CSL-2002",
            Self::Io { .. } => "CSL-3001",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
