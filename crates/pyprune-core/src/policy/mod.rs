//! The pruning policy: which runtime files are essential, which are removable,
//! and how application imports are classified.

pub mod defaults;
pub mod overrides;

pub use overrides::PolicyOverrides;

use crate::core::PruneResult;
use crate::matcher::PatternSet;
use serde::Serialize;
use std::collections::BTreeSet;

/// A fully resolved pruning policy.
///
/// Build one with [`Policy::default`] and extend it with [`Policy::merged`].
/// All names are compared case-sensitively against basenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Directory names whose whole subtree is never deleted.
    pub essential_dirs: BTreeSet<String>,
    /// Modules only needed at build time.
    pub build_dependencies: BTreeSet<String>,
    /// Modules excluded from import classification (test scaffolding).
    pub ignore_modules: BTreeSet<String>,
    /// Project-internal packages excluded from import classification.
    pub project_specific_ignores: BTreeSet<String>,
    /// Globs matched against directory names.
    pub removable_dirs: BTreeSet<String>,
    /// Globs matched against file names.
    pub removable_files: BTreeSet<String>,
    /// Exact file names of removable standard library modules.
    pub removable_modules: BTreeSet<String>,
    /// Modules that may be imported but are never required.
    pub optional_dependencies: BTreeSet<String>,
    /// Glob locating the standard library directory under `lib/`.
    pub library_dir_pattern: String,
}

fn set_of(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn union(base: &BTreeSet<String>, extra: &Option<BTreeSet<String>>) -> BTreeSet<String> {
    match extra {
        Some(extra) => base.union(extra).cloned().collect(),
        None => base.clone(),
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            essential_dirs: set_of(defaults::ESSENTIAL_DIRS),
            build_dependencies: set_of(defaults::BUILD_DEPENDENCIES),
            ignore_modules: set_of(defaults::IGNORE_MODULES),
            project_specific_ignores: BTreeSet::new(),
            removable_dirs: set_of(defaults::REMOVABLE_DIRS),
            removable_files: set_of(defaults::REMOVABLE_FILES),
            removable_modules: BTreeSet::new(),
            optional_dependencies: BTreeSet::new(),
            library_dir_pattern: defaults::LIBRARY_DIR_PATTERN.to_string(),
        }
    }
}

impl Policy {
    /// Combine this policy with a partial fragment.
    ///
    /// Set fields are unioned, so the result is a superset of both inputs.
    /// Scalar fields present in the fragment replace the base value.
    pub fn merged(&self, overrides: &PolicyOverrides) -> Policy {
        Policy {
            essential_dirs: union(&self.essential_dirs, &overrides.essential_dirs),
            build_dependencies: union(&self.build_dependencies, &overrides.build_dependencies),
            ignore_modules: union(&self.ignore_modules, &overrides.ignore_modules),
            project_specific_ignores: union(
                &self.project_specific_ignores,
                &overrides.project_specific_ignores,
            ),
            removable_dirs: union(&self.removable_dirs, &overrides.removable_dirs),
            removable_files: union(&self.removable_files, &overrides.removable_files),
            removable_modules: union(&self.removable_modules, &overrides.removable_modules),
            optional_dependencies: union(
                &self.optional_dependencies,
                &overrides.optional_dependencies,
            ),
            library_dir_pattern: overrides
                .library_dir_pattern
                .clone()
                .unwrap_or_else(|| self.library_dir_pattern.clone()),
        }
    }

    /// Add extra project-specific ignores, e.g. from the command line.
    pub fn with_project_ignores<I, S>(&self, names: I) -> Policy
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extra: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        self.merged(&PolicyOverrides {
            project_specific_ignores: Some(extra),
            ..PolicyOverrides::default()
        })
    }

    /// Check that every pattern compiles.
    pub fn validate(&self) -> PruneResult<()> {
        self.removable_dir_patterns()?;
        self.removable_file_patterns()?;
        self.library_dir_matcher()?;
        Ok(())
    }

    pub fn removable_dir_patterns(&self) -> PruneResult<PatternSet> {
        PatternSet::new(&self.removable_dirs)
    }

    pub fn removable_file_patterns(&self) -> PruneResult<PatternSet> {
        PatternSet::new(&self.removable_files)
    }

    pub fn library_dir_matcher(&self) -> PruneResult<PatternSet> {
        PatternSet::new([&self.library_dir_pattern])
    }

    /// Whether a module is excluded from import classification entirely.
    pub fn is_ignored(&self, module: &str) -> bool {
        self.ignore_modules.contains(module) || self.project_specific_ignores.contains(module)
    }

    pub fn is_essential_dir(&self, name: &str) -> bool {
        self.essential_dirs.contains(name)
    }

    pub fn is_removable_module(&self, file_name: &str) -> bool {
        self.removable_modules.contains(file_name)
    }
}
