//! Basename pattern matching.
//!
//! Policy patterns are shell-style globs (`*`, `?`, `[...]`) matched against a
//! single file or directory name, never a full path.

use crate::core::{PruneError, PruneResult};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Anything that can decide whether a file or directory name matches.
pub trait BasenameMatcher {
    fn matches(&self, basename: &str) -> bool;
}

/// A compiled set of basename globs.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
    len: usize,
}

impl PatternSet {
    /// Compile `patterns` into a single matcher.
    pub fn new<I, S>(patterns: I) -> PruneResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut len = 0;
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|e| PruneError::Pattern(format!("'{}': {}", pattern, e)))?;
            builder.add(glob);
            len += 1;
        }
        let set = builder
            .build()
            .map_err(|e| PruneError::Pattern(e.to_string()))?;
        Ok(Self { set, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl BasenameMatcher for PatternSet {
    fn matches(&self, basename: &str) -> bool {
        self.set.is_match(basename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_patterns() {
        let set = PatternSet::new(["*.pyc", "LICENSE*", "config-*"]).unwrap();
        assert!(set.matches("foo.cpython-39.pyc"));
        assert!(set.matches("LICENSE.txt"));
        assert!(set.matches("LICENSE"));
        assert!(set.matches("config-3.9-x86_64-linux-gnu"));
        assert!(!set.matches("foo.py"));
        assert!(!set.matches("license"));
    }

    #[test]
    fn test_literal_pattern_is_exact() {
        let set = PatternSet::new(["tests", "Makefile"]).unwrap();
        assert!(set.matches("tests"));
        assert!(set.matches("Makefile"));
        assert!(!set.matches("unittests"));
        assert!(!set.matches("Makefile.in"));
    }

    #[test]
    fn test_question_mark_and_class() {
        let set = PatternSet::new(["tk?.?", "[Tt]ix*"]).unwrap();
        assert!(set.matches("tk8.6"));
        assert!(set.matches("Tix8.4.3"));
        assert!(set.matches("tix"));
        assert!(!set.matches("tkinter"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = PatternSet::new(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
        assert!(!set.matches("anything"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternSet::new(["[unclosed"]).unwrap_err();
        assert!(matches!(err, PruneError::Pattern(_)));
    }
}
