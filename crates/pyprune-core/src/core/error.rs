use std::path::PathBuf;
use thiserror::Error;

pub type PruneResult<T> = Result<T, PruneError>;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to {action} {}: {source}", .path.display())]
    Fs {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Distribution path not found: {}", .0.display())]
    DistributionNotFound(PathBuf),

    #[error("Could not find Python library directory under {}", .0.display())]
    LibraryNotFound(PathBuf),

    #[error("WalkDir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl PruneError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PruneError::Fs {
            action,
            path: path.into(),
            source,
        }
    }
}
