//! Policy-driven pruning of an installed Python distribution.

mod engine;

pub use engine::DistributionPruner;

use serde::Serialize;

/// Counters for one pruning run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PruneStats {
    /// Files, directory trees and empty directories deleted.
    pub removed: usize,
    /// Empty directories deleted by the final sweep (included in `removed`).
    pub empty_dirs_removed: usize,
    /// Total file bytes before pruning.
    pub initial_size: u64,
    /// Total file bytes after pruning.
    pub final_size: u64,
}

impl PruneStats {
    pub fn bytes_saved(&self) -> u64 {
        self.initial_size.saturating_sub(self.final_size)
    }
}
