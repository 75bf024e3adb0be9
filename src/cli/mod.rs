use clap::Args;
use pyprune_core::{Policy, PruneError, PruneResult};
use serde::Serialize;
use std::path::PathBuf;

pub mod imports;
pub mod prune;

/// Policy options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Path to a YAML policy file extending the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Additional project-specific modules to ignore
    #[arg(long, num_args = 0..)]
    pub project_ignores: Vec<String>,
}

impl PolicyArgs {
    pub fn resolve(&self) -> PruneResult<Policy> {
        pyprune::config::resolve_policy(self.config.as_deref(), &self.project_ignores)
    }
}

fn print_json<T: Serialize>(value: &T) -> PruneResult<()> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| PruneError::Config(format!("Failed to serialize output: {}", e)))?;
    println!("{}", content);
    Ok(())
}
