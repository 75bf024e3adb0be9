use pyprune_core::{Policy, PolicyOverrides, PruneResult};
use std::path::Path;
use tracing::{debug, warn};

/// Build the effective policy for a run.
///
/// Starts from the built-in defaults, merges the policy file when one is
/// given, adds command-line project ignores and checks every pattern.
/// A policy path that does not exist falls back to the defaults.
pub fn resolve_policy(
    config_path: Option<&Path>,
    project_ignores: &[String],
) -> PruneResult<Policy> {
    let mut policy = Policy::default();

    if let Some(path) = config_path {
        if path.exists() {
            debug!("Loading policy from {}", path.display());
            let overrides = PolicyOverrides::load(path)?;
            policy = policy.merged(&overrides);
        } else {
            warn!(
                "Policy file {} not found, using built-in defaults",
                path.display()
            );
        }
    }

    if !project_ignores.is_empty() {
        policy = policy.with_project_ignores(project_ignores);
    }

    policy.validate()?;
    Ok(policy)
}
