// Core functionality
pub mod core;

// Basename pattern matching
pub mod matcher;

// Pruning policy
pub mod policy;

// Re-export commonly used types
pub use crate::core::{format_error_with_help, ErrorHelp, PruneError, PruneResult};
pub use matcher::{BasenameMatcher, PatternSet};
pub use policy::{Policy, PolicyOverrides};
