//! Human-readable summaries of analysis and pruning runs.

use crate::analyzer::FileStats;
use crate::prune::PruneStats;

const MIB: f64 = 1024.0 * 1024.0;

/// Format a byte count as mebibytes with one decimal, e.g. `12.3MB`.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / MIB)
}

/// Summary lines printed after a prune.
pub fn prune_summary(stats: &PruneStats) -> Vec<String> {
    vec![
        format!("Files and directories removed: {}", stats.removed),
        format!("Space saved: {}", format_size_mb(stats.bytes_saved())),
        format!("Final distribution size: {}", format_size_mb(stats.final_size)),
    ]
}

pub fn analysis_summary(stats: &FileStats) -> String {
    format!(
        "Analyzed {} of {} source files ({} errors)",
        stats.analyzed, stats.total, stats.errors
    )
}
