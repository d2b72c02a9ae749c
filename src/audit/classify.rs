//! Symlink target resolution and policy-driven removal.
//!
//! Everything in this module is the recoverable error tier: a target that
//! cannot be resolved is counted as broken, a removal that fails is counted
//! as an error, and the walk continues either way. No retries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::audit::report::RunCounters;
use crate::audit::walker::VisitOutcome;
use crate::core::config::DeletionPolicy;
use crate::logger::ConsoleLogger;

/// Outcome of resolving a symlink target chain.
#[derive(Debug)]
pub enum Resolution {
    /// The link (and any chain of links) resolves to this real path.
    Resolved(PathBuf),
    /// Resolution failed: target missing, permission denied, loop, etc.
    Broken(io::Error),
}

/// Follow the link (and any chain of links) to its final concrete target.
///
/// `fs::canonicalize` follows the whole chain and fails on missing targets,
/// permission failures, and symlink loops, which is exactly the broken-link
/// definition used here.
pub fn resolve_target(path: &Path) -> Resolution {
    match fs::canonicalize(path) {
        Ok(resolved) => Resolution::Resolved(resolved),
        Err(err) => Resolution::Broken(err),
    }
}

/// Remove a symlink entry. Removes the link itself, never its target.
pub fn remove_link(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

/// Apply the configured deletion policy to one symlink entry.
///
/// Increments `inspected` for every call, then either removes the link
/// (`DeleteAll`), or classifies it and removes it only when broken under
/// `DeleteBroken`. Removal failures are reported coarsely: permission
/// errors are not distinguished from other failure modes.
pub fn apply_policy(
    path: &Path,
    policy: DeletionPolicy,
    counters: &mut RunCounters,
    logger: &ConsoleLogger,
) -> VisitOutcome {
    counters.inspected += 1;

    if policy == DeletionPolicy::DeleteAll {
        logger.info(&format!("remove link {}", path.display()));
        return attempt_removal(path, counters, logger);
    }

    match resolve_target(path) {
        Resolution::Resolved(target) => {
            logger.info(&format!(
                "symlink {} -> {} OK",
                path.display(),
                target.display()
            ));
            VisitOutcome::LinkOk(target)
        }
        Resolution::Broken(err) => {
            counters.broken += 1;
            logger.warn(&format!("broken link {}: {err}", path.display()));
            if policy == DeletionPolicy::DeleteBroken {
                logger.info(&format!("remove broken link {}", path.display()));
                attempt_removal(path, counters, logger)
            } else {
                VisitOutcome::LinkBroken
            }
        }
    }
}

fn attempt_removal(
    path: &Path,
    counters: &mut RunCounters,
    logger: &ConsoleLogger,
) -> VisitOutcome {
    match remove_link(path) {
        Ok(()) => {
            counters.removed += 1;
            VisitOutcome::LinkRemoved
        }
        Err(err) => {
            counters.errors += 1;
            logger.error(&format!("could not remove {}: {err}", path.display()));
            VisitOutcome::LinkRemovalFailed
        }
    }
}
