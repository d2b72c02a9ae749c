//! Run counters and end-of-run reporting.

use std::time::Duration;

/// Monotonic counters for one audit run.
///
/// Created at start, threaded `&mut` through the walk, reported once at the
/// end. Holds for every run: each symlink visited increments `inspected`
/// exactly once, `removed <= inspected`, and `broken <= inspected` (broken
/// links are a subset of inspected, not additive with valid ones).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    /// Symbolic links visited.
    pub inspected: u64,
    /// Links successfully removed under a deletion policy.
    pub removed: u64,
    /// Links whose target could not be resolved.
    pub broken: u64,
    /// Recoverable failures (removals that did not succeed).
    pub errors: u64,
}

impl RunCounters {
    /// Fresh zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inspected: 0,
            removed: 0,
            broken: 0,
            errors: 0,
        }
    }
}

/// Final report for one run: the counters plus wall-clock elapsed time.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Counters accumulated during the walk.
    pub counters: RunCounters,
    /// Wall-clock duration of the whole run.
    pub elapsed: Duration,
}

impl RunReport {
    /// The four counter lines plus the execution-time line, in report order.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let c = &self.counters;
        vec![
            format!("{:<16} {}", "inspected links:", c.inspected),
            format!("{:<16} {}", "removed links:", c.removed),
            format!("{:<16} {}", "broken links:", c.broken),
            format!("{:<16} {}", "errors:", c.errors),
            format!("Execution time: {:?}", self.elapsed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_counters_are_zero() {
        let c = RunCounters::new();
        assert_eq!(c.inspected, 0);
        assert_eq!(c.removed, 0);
        assert_eq!(c.broken, 0);
        assert_eq!(c.errors, 0);
    }

    #[test]
    fn summary_has_four_counter_lines_and_elapsed() {
        let report = RunReport {
            counters: RunCounters {
                inspected: 12,
                removed: 3,
                broken: 4,
                errors: 1,
            },
            elapsed: Duration::from_millis(42),
        };
        let lines = report.summary_lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("inspected links:"));
        assert!(lines[0].ends_with("12"));
        assert!(lines[1].ends_with('3'));
        assert!(lines[2].ends_with('4'));
        assert!(lines[3].ends_with('1'));
        assert!(lines[4].starts_with("Execution time:"));
    }
}
