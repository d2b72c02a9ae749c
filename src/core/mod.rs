//! Core types: errors and run configuration.

pub mod config;
pub mod errors;
