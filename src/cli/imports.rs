use crate::cli::{print_json, PolicyArgs};
use pyprune::analyzer::ImportAnalyzer;
use pyprune::report::analysis_summary;
use pyprune_core::{Policy, PruneResult};
use std::path::Path;
use tracing::debug;

pub fn run(source_dir: &Path, policy_args: &PolicyArgs, json: bool) -> PruneResult<()> {
    let policy = policy_args.resolve()?;
    print_imports(&policy, source_dir, json)
}

/// Print the runtime imports of `source_dir` as a sorted, comma-joined list.
pub fn print_imports(policy: &Policy, source_dir: &Path, json: bool) -> PruneResult<()> {
    let report = ImportAnalyzer::new(policy).analyze_tree(source_dir)?;
    debug!("{}", analysis_summary(&report.stats));

    if json {
        print_json(&report)
    } else {
        println!("{}", report.imports.runtime_listing());
        Ok(())
    }
}
