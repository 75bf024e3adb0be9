//! pyprune: trim an installed Python distribution down to what an
//! application needs.
//!
//! This crate holds the import analysis and pruning engine. The policy model
//! and error types live in `pyprune-core` and are re-exported here.

pub use pyprune_core::{
    format_error_with_help, BasenameMatcher, ErrorHelp, PatternSet, Policy, PolicyOverrides,
    PruneError, PruneResult,
};

/// Static import discovery.
pub mod analyzer;

/// Policy resolution from files and command-line options.
pub mod config;

/// Distribution pruning.
pub mod prune;

/// Run summaries.
pub mod report;
