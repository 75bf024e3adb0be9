//! Built-in safe defaults.
//!
//! These are the protections and removal candidates every run starts from.
//! Project policy files can only add to them.

/// Directories needed by any interpreter start-up.
pub const ESSENTIAL_DIRS: &[&str] = &[
    "lib-dynload", // Dynamic loading support
    "encodings",   // Text encoding support
    "importlib",   // Import machinery
];

pub const BUILD_DEPENDENCIES: &[&str] = &["setuptools", "pip"];

/// Test scaffolding never counted as an application import.
pub const IGNORE_MODULES: &[&str] = &["test", "mock", "pytest"];

pub const REMOVABLE_DIRS: &[&str] = &["__pycache__", "test", "tests", "site-packages"];

pub const REMOVABLE_FILES: &[&str] = &[
    "*.pyc", "*.pyo", // Bytecode
    "*.html", "*.txt", // Documentation
    "LICENSE*", "README*", "CHANGES*", "NEWS*",
];

/// Version-qualified name of the standard library directory under `lib/`.
pub const LIBRARY_DIR_PATTERN: &str = "python3.*";
