//! Static import discovery over an application source tree.

pub mod parser;

pub use parser::PythonParser;

use pyprune_core::{Policy, PruneError, PruneResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How an imported module is needed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Runtime,
    Build,
    Optional,
}

/// Imported top-level modules, split by how they are needed.
///
/// A module appears in at most one set. Ignored modules appear in none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportClassification {
    pub runtime: BTreeSet<String>,
    pub build: BTreeSet<String>,
    pub optional: BTreeSet<String>,
}

impl ImportClassification {
    fn insert(&mut self, kind: ImportKind, module: String) {
        match kind {
            ImportKind::Runtime => self.runtime.insert(module),
            ImportKind::Build => self.build.insert(module),
            ImportKind::Optional => self.optional.insert(module),
        };
    }

    fn extend(&mut self, other: ImportClassification) {
        self.runtime.extend(other.runtime);
        self.build.extend(other.build);
        self.optional.extend(other.optional);
    }

    /// Runtime modules, sorted and comma-joined.
    pub fn runtime_listing(&self) -> String {
        self.runtime.iter().cloned().collect::<Vec<_>>().join(",")
    }
}

/// Per-run file counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileStats {
    /// Source files found
    pub total: usize,
    /// Source files parsed successfully
    pub analyzed: usize,
    /// Source files that could not be read or parsed
    pub errors: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub imports: ImportClassification,
    pub stats: FileStats,
}

/// Collects and classifies the imports of a source tree against a [`Policy`].
pub struct ImportAnalyzer<'a> {
    policy: &'a Policy,
    parser: PythonParser,
}

impl<'a> ImportAnalyzer<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self {
            policy,
            parser: PythonParser::new(),
        }
    }

    /// Classify a top-level module name, or `None` if it is ignored.
    pub fn classify(&self, module: &str) -> Option<ImportKind> {
        if self.policy.is_ignored(module) {
            None
        } else if self.policy.build_dependencies.contains(module) {
            Some(ImportKind::Build)
        } else if self.policy.optional_dependencies.contains(module) {
            Some(ImportKind::Optional)
        } else {
            Some(ImportKind::Runtime)
        }
    }

    /// Classify the imports of a single module's source.
    pub fn analyze_source(
        &self,
        content: &str,
        source_path: &str,
    ) -> PruneResult<ImportClassification> {
        let mut result = ImportClassification::default();
        for module in self.parser.extract_imports(content, source_path)? {
            if let Some(kind) = self.classify(&module) {
                result.insert(kind, module);
            }
        }
        Ok(result)
    }

    /// Analyze every `*.py` file under `root`.
    ///
    /// Unreadable or unparseable files are logged and counted in
    /// [`FileStats::errors`]; they never abort the run.
    pub fn analyze_tree(&self, root: &Path) -> PruneResult<ImportReport> {
        if !root.is_dir() {
            return Err(PruneError::SourceNotFound(root.to_path_buf()));
        }

        let mut report = ImportReport::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable path during analysis: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("py") || !path.is_file() {
                continue;
            }

            report.stats.total += 1;
            match self.analyze_file(path) {
                Ok(imports) => {
                    report.imports.extend(imports);
                    report.stats.analyzed += 1;
                }
                Err(e) => {
                    warn!("Analyzing {} raised {}", path.display(), e);
                    report.stats.errors += 1;
                }
            }
        }

        debug!(
            "Analyzed {} of {} source files ({} errors)",
            report.stats.analyzed, report.stats.total, report.stats.errors
        );

        Ok(report)
    }

    fn analyze_file(&self, path: &Path) -> PruneResult<ImportClassification> {
        let content =
            fs::read_to_string(path).map_err(|e| PruneError::fs("read", path, e))?;
        self.analyze_source(&content, &path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyprune_core::PolicyOverrides;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classification_scenario() {
        let policy = Policy::default().merged(&PolicyOverrides {
            ignore_modules: Some(set(&["pytest"])),
            project_specific_ignores: Some(set(&["mypkg"])),
            ..PolicyOverrides::default()
        });
        let analyzer = ImportAnalyzer::new(&policy);

        let result = analyzer
            .analyze_source("import json\nimport pytest\nfrom mypkg import x\n", "app.py")
            .unwrap();

        assert_eq!(result.runtime, set(&["json"]));
        assert!(result.build.is_empty());
        assert!(result.optional.is_empty());
    }

    #[test]
    fn test_build_and_optional() {
        let policy = Policy::default().merged(&PolicyOverrides {
            optional_dependencies: Some(set(&["readline"])),
            ..PolicyOverrides::default()
        });
        let analyzer = ImportAnalyzer::new(&policy);

        let result = analyzer
            .analyze_source(
                "import setuptools\nimport readline\nimport os.path\nfrom pip._internal import main\n",
                "setup.py",
            )
            .unwrap();

        assert_eq!(result.runtime, set(&["os"]));
        assert_eq!(result.build, set(&["pip", "setuptools"]));
        assert_eq!(result.optional, set(&["readline"]));
    }

    #[test]
    fn test_ignored_never_classified() {
        let policy = Policy::default().with_project_ignores(["umu"]);
        let analyzer = ImportAnalyzer::new(&policy);
        assert_eq!(analyzer.classify("umu"), None);
        assert_eq!(analyzer.classify("mock"), None);
        assert_eq!(analyzer.classify("pip"), Some(ImportKind::Build));
        assert_eq!(analyzer.classify("json"), Some(ImportKind::Runtime));
    }

    #[test]
    fn test_analyze_tree_unions_files_and_counts_errors() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("pkg/sub")).unwrap();
        fs::write(root.join("main.py"), "import json\nimport logging\n").unwrap();
        fs::write(
            root.join("pkg/__init__.py"),
            "from json import dumps\nimport subprocess\n",
        )
        .unwrap();
        fs::write(root.join("pkg/sub/broken.py"), "def nope(:\n    import shutil\n").unwrap();
        fs::write(root.join("pkg/notes.txt"), "import tkinter\n").unwrap();

        let policy = Policy::default();
        let report = ImportAnalyzer::new(&policy).analyze_tree(root).unwrap();

        assert_eq!(report.imports.runtime, set(&["json", "logging", "subprocess"]));
        assert_eq!(report.stats.total, 3);
        assert_eq!(report.stats.analyzed, 2);
        assert_eq!(report.stats.errors, 1);
    }

    #[test]
    fn test_analyze_tree_counts_undecodable_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ok.py"), "import ssl\n").unwrap();
        fs::write(temp.path().join("latin1.py"), b"# caf\xe9\nimport zlib\n").unwrap();

        let policy = Policy::default();
        let report = ImportAnalyzer::new(&policy).analyze_tree(temp.path()).unwrap();

        assert_eq!(report.imports.runtime, set(&["ssl"]));
        assert_eq!(report.stats.errors, 1);
    }

    #[test]
    fn test_modern_fstring_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("fmt.py"),
            "import json\nd = {'k': 1}\nx = f\"{d[\"k\"]}\"\n",
        )
        .unwrap();

        let policy = Policy::default();
        let report = ImportAnalyzer::new(&policy).analyze_tree(temp.path()).unwrap();

        assert_eq!(report.imports.runtime, set(&["json"]));
        assert_eq!(report.stats.analyzed, 1);
        assert_eq!(report.stats.errors, 0);
    }

    #[test]
    fn test_analyze_tree_missing_root() {
        let temp = TempDir::new().unwrap();
        let policy = Policy::default();
        let err = ImportAnalyzer::new(&policy)
            .analyze_tree(&temp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, PruneError::SourceNotFound(_)));
    }

    #[test]
    fn test_runtime_listing_is_sorted() {
        let mut imports = ImportClassification::default();
        imports.runtime = set(&["zlib", "json", "base64"]);
        assert_eq!(imports.runtime_listing(), "base64,json,zlib");
    }
}
