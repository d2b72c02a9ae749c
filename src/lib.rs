#![forbid(unsafe_code)]

//! checksymlinks — recursive symbolic-link auditor.
//!
//! Walks a directory tree depth-first, classifies every symlink as valid or
//! broken (target unresolvable), and optionally deletes links matching a
//! policy: every link, or only the broken ones.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use checksymlinks::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use checksymlinks::core::config::{AuditConfig, DeletionPolicy};
//! use checksymlinks::audit::walker::walk_tree;
//! ```

pub mod prelude;

pub mod audit;
pub mod core;
pub mod logger;
