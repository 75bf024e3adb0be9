use crate::prune::PruneStats;
use pyprune_core::core::fs::tree_size;
use pyprune_core::{BasenameMatcher, PatternSet, Policy, PruneError, PruneResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Deletes removable files from a distribution according to a [`Policy`].
///
/// Pruning runs in a fixed order: locate `lib/python3.X`, deep-clean it,
/// clean the other children of `lib/`, then sweep empty directories.
pub struct DistributionPruner<'a> {
    root: PathBuf,
    policy: &'a Policy,
    dir_patterns: PatternSet,
    file_patterns: PatternSet,
    library_matcher: PatternSet,
}

impl<'a> DistributionPruner<'a> {
    pub fn new(root: impl Into<PathBuf>, policy: &'a Policy) -> PruneResult<Self> {
        Ok(Self {
            root: root.into(),
            policy,
            dir_patterns: policy.removable_dir_patterns()?,
            file_patterns: policy.removable_file_patterns()?,
            library_matcher: policy.library_dir_matcher()?,
        })
    }

    /// Run every phase and return the removal counts and sizes.
    pub fn prune(&self) -> PruneResult<PruneStats> {
        if !self.root.is_dir() {
            return Err(PruneError::DistributionNotFound(self.root.clone()));
        }

        let mut stats = PruneStats {
            initial_size: tree_size(&self.root)?,
            ..PruneStats::default()
        };

        let library_dir = self.locate_library_dir()?;
        debug!("Using library directory {}", library_dir.display());

        let removed = self.clean_library_dir(&library_dir)?;
        debug!("Removed {} entries from {}", removed, library_dir.display());
        stats.removed += removed;

        let removed = self.clean_lib_siblings(&library_dir)?;
        debug!("Removed {} entries next to the library directory", removed);
        stats.removed += removed;

        stats.empty_dirs_removed = self.sweep_empty_dirs()?;
        stats.removed += stats.empty_dirs_removed;

        stats.final_size = tree_size(&self.root)?;

        info!(
            "Pruned {}: {} entries removed",
            self.root.display(),
            stats.removed
        );

        Ok(stats)
    }

    /// Find `lib/<library_dir_pattern>` under the distribution root.
    ///
    /// Candidates are taken in name order so the choice is stable.
    pub fn locate_library_dir(&self) -> PruneResult<PathBuf> {
        let lib = self.root.join("lib");
        if !lib.is_dir() {
            return Err(PruneError::LibraryNotFound(self.root.clone()));
        }

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&lib).map_err(|e| PruneError::fs("read directory", &lib, e))? {
            let entry = entry.map_err(|e| PruneError::fs("read directory", &lib, e))?;
            let path = entry.path();
            if path.is_dir() && self.library_matcher.matches(&entry.file_name().to_string_lossy()) {
                candidates.push(path);
            }
        }
        candidates.sort();

        candidates
            .into_iter()
            .next()
            .ok_or_else(|| PruneError::LibraryNotFound(self.root.clone()))
    }

    /// Whether any directory segment of `relative` is an essential directory.
    fn is_protected(&self, relative: &Path) -> bool {
        relative
            .iter()
            .any(|segment| self.policy.is_essential_dir(&segment.to_string_lossy()))
    }

    fn is_protected_entry(&self, library_dir: &Path, entry: &DirEntry) -> bool {
        let relative = entry.path().strip_prefix(library_dir).unwrap_or(entry.path());
        let dirs = if entry.file_type().is_dir() {
            Some(relative)
        } else {
            relative.parent()
        };
        dirs.map(|d| self.is_protected(d)).unwrap_or(false)
    }

    fn is_removable_file(&self, name: &str) -> bool {
        self.policy.is_removable_module(name) || self.file_patterns.matches(name)
    }

    /// Phase 2: remove matching files and directory trees from the library
    /// directory, never entering essential directories.
    fn clean_library_dir(&self, library_dir: &Path) -> PruneResult<usize> {
        let mut removed = 0;
        let mut walker = WalkDir::new(library_dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                let protected = self.is_protected_entry(library_dir, e);
                if protected && e.file_type().is_dir() {
                    debug!("Keeping essential directory {}", e.path().display());
                }
                !protected
            });

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy();
            let path = entry.path();

            if is_dir_like(&entry) {
                if self.dir_patterns.matches(&name) {
                    remove_path(path, &entry)?;
                    removed += 1;
                    if entry.file_type().is_dir() {
                        walker.skip_current_dir();
                    }
                }
            } else if self.is_removable_file(&name) {
                remove_path(path, &entry)?;
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Phase 3: clean the other children of `lib/` (Tcl/Tk support trees,
    /// pkgconfig and friends). Essential directories do not apply here.
    fn clean_lib_siblings(&self, library_dir: &Path) -> PruneResult<usize> {
        let lib = self.root.join("lib");
        if !lib.is_dir() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in WalkDir::new(&lib)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if path == library_dir {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let matched = if is_dir_like(&entry) {
                self.dir_patterns.matches(&name)
            } else {
                self.file_patterns.matches(&name)
            };

            if matched {
                remove_path(path, &entry)?;
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Phase 4: remove empty directories, deepest first. Directories that
    /// cannot be removed are left alone.
    fn sweep_empty_dirs(&self) -> PruneResult<usize> {
        let mut removed = 0;
        for entry in WalkDir::new(&self.root).min_depth(1).contents_first(true) {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            let is_empty = fs::read_dir(path)
                .map(|mut children| children.next().is_none())
                .unwrap_or(false);
            if !is_empty {
                continue;
            }

            match fs::remove_dir(path) {
                Ok(()) => {
                    debug!("Removed empty directory {}", path.display());
                    removed += 1;
                }
                Err(e) => debug!("Could not remove {}: {}", path.display(), e),
            }
        }
        Ok(removed)
    }
}

/// Directories, and symlinks pointing at directories.
fn is_dir_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn remove_path(path: &Path, entry: &DirEntry) -> PruneResult<()> {
    debug!("Removing {}", path.display());
    if entry.file_type().is_dir() {
        fs::remove_dir_all(path).map_err(|e| PruneError::fs("remove directory", path, e))
    } else {
        // Symlinks are removed as links, never followed.
        fs::remove_file(path).map_err(|e| PruneError::fs("remove", path, e))
    }
}
