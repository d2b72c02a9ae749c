//! Console logging: timestamped stderr lines with severity coloring.
//!
//! One sink only — this is a one-shot auditing tool, so log lines go straight
//! to stderr (keeping stdout clean for potential redirection of the tree
//! being audited). Informational lines are gated by the quiet flag; warnings,
//! errors, and the final summary always print.

use colored::Colorize;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational; suppressed in quiet mode.
    Info,
    /// Always printed, yellow.
    Warn,
    /// Always printed, red.
    Error,
}

impl Severity {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Stderr logger carrying the run's verbosity setting.
///
/// Replaces the original implementation's process-global quiet flag: the
/// logger is constructed once from [`AuditConfig::quiet`] and passed by
/// reference through the walk.
///
/// [`AuditConfig::quiet`]: crate::core::config::AuditConfig
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    quiet: bool,
}

impl ConsoleLogger {
    /// Create a logger; `quiet` suppresses [`Severity::Info`] lines.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Whether informational lines are suppressed.
    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Informational line (visited entries, resolved targets). Gated by quiet.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", format_line(Severity::Info, msg));
        }
    }

    /// Warning line (broken-link detections). Always printed.
    pub fn warn(&self, msg: &str) {
        eprintln!("{}", format_line(Severity::Warn, msg).yellow());
    }

    /// Error line (removal failures, fatal diagnostics). Always printed.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", format_line(Severity::Error, msg).red());
    }

    /// Summary line. Always printed, never colored, no severity tag.
    pub fn summary(&self, msg: &str) {
        eprintln!("{} {msg}", timestamp());
    }
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_line(severity: Severity, msg: &str) -> String {
    format!("{} [{}] {msg}", timestamp(), severity.tag())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_line_contains_tag_and_message() {
        let line = format_line(Severity::Warn, "broken link a");
        assert!(line.contains("[WARN]"), "missing tag: {line}");
        assert!(line.contains("broken link a"), "missing message: {line}");
    }

    #[test]
    fn severity_tags_are_distinct() {
        assert_ne!(Severity::Info.tag(), Severity::Warn.tag());
        assert_ne!(Severity::Warn.tag(), Severity::Error.tag());
    }

    #[test]
    fn quiet_flag_is_recorded() {
        assert!(ConsoleLogger::new(true).is_quiet());
        assert!(!ConsoleLogger::new(false).is_quiet());
    }
}
