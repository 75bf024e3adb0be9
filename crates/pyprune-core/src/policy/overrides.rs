use crate::core::{PruneError, PruneResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// A partially specified policy, as written in a project policy file.
///
/// Every field is optional. Present set fields are unioned into the base
/// policy, they never replace it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub essential_dirs: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_dependencies: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_modules: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_specific_ignores: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removable_dirs: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removable_files: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removable_modules: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_dependencies: Option<BTreeSet<String>>,
    /// Replaces the base value when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_dir_pattern: Option<String>,
}

impl PolicyOverrides {
    /// Parse a YAML policy fragment. An empty document is an empty fragment.
    pub fn from_yaml_str(content: &str) -> PruneResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a policy fragment from a YAML file
    pub fn load(path: &Path) -> PruneResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PruneError::fs("read policy file", path, e))?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            PruneError::Yaml(e) => PruneError::Config(format!(
                "Failed to parse policy file {}: {}",
                path.display(),
                e
            )),
            other => other,
        })
    }
}
