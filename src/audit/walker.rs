//! Depth-first, lexical-order directory walk with an explicit visitor.
//!
//! The walk never follows symbolic links when recursing: a symlink pointing
//! at a directory is a link entry to classify, not a descent point. Entry
//! types are taken link-aware via `fs::symlink_metadata`.
//!
//! Error tiers: failures enumerating a directory or stat-ing an entry abort
//! the whole run (fatal); per-link resolution and removal failures are
//! handled inside [`classify`](crate::audit::classify) and only counted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audit::classify;
use crate::audit::report::RunCounters;
use crate::core::config::AuditConfig;
use crate::core::errors::{CslError, Result};
use crate::logger::ConsoleLogger;

/// Per-entry outcome produced by the visitor.
#[derive(Debug)]
pub enum VisitOutcome {
    /// Real directory; the walk descends into it.
    Directory,
    /// Regular file or other non-link entry; nothing to audit.
    NotALink,
    /// Symlink whose chain resolved to this real path.
    LinkOk(PathBuf),
    /// Symlink whose target could not be resolved (left in place).
    LinkBroken,
    /// Symlink removed under the active deletion policy.
    LinkRemoved,
    /// Symlink removal was attempted and failed.
    LinkRemovalFailed,
}

/// Visit one filesystem entry whose link-aware type is already known.
///
/// This is the single decision point of the program: directories are noted
/// and descended into by the caller, symlinks go through classification and
/// the deletion policy, everything else is ignored.
pub fn visit_entry(
    path: &Path,
    file_type: fs::FileType,
    config: &AuditConfig,
    counters: &mut RunCounters,
    logger: &ConsoleLogger,
) -> VisitOutcome {
    if file_type.is_dir() {
        logger.info(&format!("visited dir: {}", path.display()));
        return VisitOutcome::Directory;
    }
    if file_type.is_symlink() {
        return classify::apply_policy(path, config.policy, counters, logger);
    }
    VisitOutcome::NotALink
}

/// Walk the tree rooted at `start` depth-first in lexical order.
///
/// Visits every entry exactly once. Any failure accessing a path during the
/// walk itself (enumeration or stat) aborts the run.
pub fn walk_tree(
    start: &Path,
    config: &AuditConfig,
    counters: &mut RunCounters,
    logger: &ConsoleLogger,
) -> Result<()> {
    logger.info(&format!("visited dir: {}", start.display()));
    walk_dir(start, config, counters, logger)
}

fn walk_dir(
    dir: &Path,
    config: &AuditConfig,
    counters: &mut RunCounters,
    logger: &ConsoleLogger,
) -> Result<()> {
    for path in sorted_entries(dir)? {
        let meta = fs::symlink_metadata(&path).map_err(|err| CslError::StatFailed {
            path: path.clone(),
            source: err,
        })?;
        if let VisitOutcome::Directory =
            visit_entry(&path, meta.file_type(), config, counters, logger)
        {
            walk_dir(&path, config, counters, logger)?;
        }
    }
    Ok(())
}

/// Enumerate one directory's entries in lexical order.
///
/// `read_dir` order is platform-dependent; sorting by file name gives the
/// documented deterministic visit order. Enumeration failure is fatal.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read = fs::read_dir(dir).map_err(|err| CslError::WalkAborted {
        path: dir.to_path_buf(),
        source: err,
    })?;

    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in read {
        let entry = entry.map_err(|err| CslError::WalkAborted {
            path: dir.to_path_buf(),
            source: err,
        })?;
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
