//! Traverser/classifier: walk, per-link decisions, run counters.

pub mod classify;
pub mod report;
pub mod walker;

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use crate::core::config::AuditConfig;
use crate::core::errors::{CslError, Result};
use crate::logger::ConsoleLogger;

use report::{RunCounters, RunReport};

/// Run one full audit: validate the root, change into it so every reported
/// path is root-relative, walk the tree, and produce the final report.
///
/// Changes the process working directory; callers that need the old one back
/// must restore it themselves (the CLI process simply exits).
pub fn run_audit(config: &AuditConfig, logger: &ConsoleLogger) -> Result<RunReport> {
    let start = Instant::now();

    match fs::metadata(&config.root) {
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CslError::RootMissing {
                path: config.root.clone(),
            });
        }
        // Other stat failures surface through the chdir below.
        _ => {}
    }

    env::set_current_dir(&config.root).map_err(|err| CslError::ChdirFailed {
        path: config.root.clone(),
        source: err,
    })?;
    logger.info(&format!("root dir: {}", config.root.display()));

    let mut counters = RunCounters::new();
    walker::walk_tree(Path::new("."), config, &mut counters, logger)?;

    Ok(RunReport {
        counters,
        elapsed: start.elapsed(),
    })
}
