use crate::cli::{imports, print_json, PolicyArgs};
use pyprune::analyzer::ImportAnalyzer;
use pyprune::prune::DistributionPruner;
use pyprune::report::{analysis_summary, prune_summary};
use pyprune_core::{PruneError, PruneResult};
use std::path::Path;
use tracing::debug;

pub fn run(
    dist_path: &Path,
    source_dir: &Path,
    policy_args: &PolicyArgs,
    imports_only: bool,
    json: bool,
) -> PruneResult<()> {
    if !dist_path.exists() {
        return Err(PruneError::DistributionNotFound(dist_path.to_path_buf()));
    }
    if !source_dir.exists() {
        return Err(PruneError::SourceNotFound(source_dir.to_path_buf()));
    }

    let policy = policy_args.resolve()?;

    if imports_only {
        return imports::print_imports(&policy, source_dir, json);
    }

    // Informational only: deletion is decided by the policy alone.
    let report = ImportAnalyzer::new(&policy).analyze_tree(source_dir)?;
    debug!("Found {} required modules", report.imports.runtime.len());
    debug!("Required modules: {}", report.imports.runtime_listing());
    debug!("{}", analysis_summary(&report.stats));

    let stats = DistributionPruner::new(dist_path, &policy)?.prune()?;

    if json {
        print_json(&serde_json::json!({
            "imports": report.imports,
            "analysis": report.stats,
            "prune": stats,
        }))
    } else {
        for line in prune_summary(&stats) {
            println!("{}", line);
        }
        Ok(())
    }
}
