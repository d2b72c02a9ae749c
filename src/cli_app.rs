//! Top-level CLI definition and dispatch.

use std::path::PathBuf;

use clap::Parser;

use checksymlinks::audit::run_audit;
use checksymlinks::core::config::{AuditConfig, DeletionPolicy};
use checksymlinks::core::errors::Result;
use checksymlinks::logger::ConsoleLogger;

/// checksymlinks — traverse a directory tree and search for broken links.
#[derive(Debug, Parser)]
#[command(
    name = "checksymlinks",
    author,
    version,
    about = "Traverse a directory tree recursively and search for broken symbolic links",
    after_help = "Examples:\n    \
        Report broken links\n    \
        $ checksymlinks /home/user/xyz/dir1\n\n    \
        Delete broken links\n    \
        $ checksymlinks --delete-broken /home/user/xyz/dir1"
)]
pub struct Cli {
    /// Root directory to audit.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,
    /// Remove all broken symbolic links. Use with care!
    #[arg(long, conflicts_with = "delete_all")]
    pub delete_broken: bool,
    /// Remove all symbolic links, broken or not. Use with care!
    #[arg(long)]
    pub delete_all: bool,
    /// Suppress non-error messages.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute one audit run from parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let policy = DeletionPolicy::from_flags(cli.delete_broken, cli.delete_all)?;
    let config = AuditConfig {
        root: cli.directory.clone(),
        policy,
        quiet: cli.quiet,
    };
    let logger = ConsoleLogger::new(config.quiet);

    let report = run_audit(&config, &logger)?;
    for line in report.summary_lines() {
        logger.summary(&line);
    }
    Ok(())
}
