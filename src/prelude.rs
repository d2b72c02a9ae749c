//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use checksymlinks::prelude::*;
//! ```

// Core
pub use crate::core::config::{AuditConfig, DeletionPolicy};
pub use crate::core::errors::{CslError, Result};

// Audit
pub use crate::audit::report::{RunCounters, RunReport};
pub use crate::audit::walker::{VisitOutcome, walk_tree};
pub use crate::audit::run_audit;

// Logger
pub use crate::logger::ConsoleLogger;
