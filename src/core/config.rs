//! Run configuration: root path, deletion policy, verbosity.

use std::path::PathBuf;

use crate::core::errors::{CslError, Result};

/// What to do with each symbolic link the walk encounters.
///
/// Encoding the policy as an enum makes the "both deletion flags set" state
/// unrepresentable past CLI parsing: [`DeletionPolicy::from_flags`] rejects
/// the conflicting pair before any filesystem access happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionPolicy {
    /// Classify and report only; never mutate the tree.
    #[default]
    ReportOnly,
    /// Remove links whose target cannot be resolved.
    DeleteBroken,
    /// Remove every symbolic link encountered, regardless of validity.
    DeleteAll,
}

impl DeletionPolicy {
    /// Build a policy from the two CLI flags.
    pub fn from_flags(delete_broken: bool, delete_all: bool) -> Result<Self> {
        match (delete_broken, delete_all) {
            (true, true) => Err(CslError::InvalidConfig {
                details: "--delete-broken and --delete-all are not allowed together".to_string(),
            }),
            (true, false) => Ok(Self::DeleteBroken),
            (false, true) => Ok(Self::DeleteAll),
            (false, false) => Ok(Self::ReportOnly),
        }
    }

    /// Whether this policy may mutate the filesystem.
    #[must_use]
    pub const fn deletes(self) -> bool {
        !matches!(self, Self::ReportOnly)
    }
}

/// Full configuration for one audit run.
///
/// Passed by reference through the walk; there is no process-global state.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Root directory to audit. The process changes into it at startup so
    /// every reported path is root-relative.
    pub root: PathBuf,
    /// Deletion policy applied to each symlink.
    pub policy: DeletionPolicy,
    /// Suppress informational output (warnings, errors, and the final
    /// summary still print).
    pub quiet: bool,
}

impl AuditConfig {
    /// Create a report-only configuration for the given root.
    #[must_use]
    pub fn report_only(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy: DeletionPolicy::ReportOnly,
            quiet: false,
        }
    }
}
