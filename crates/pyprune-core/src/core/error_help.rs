use crate::core::PruneError;

/// Provides helpful suggestions for common errors
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for PruneError {
    fn help(&self) -> Option<String> {
        match self {
            PruneError::SourceNotFound(_) => Some(
                "💡 Suggestion: Pass the directory containing the application's Python sources"
                    .to_string(),
            ),
            PruneError::DistributionNotFound(_) => Some(
                "💡 Suggestion: Pass the root of an installed Python distribution (the directory containing bin/ and lib/)"
                    .to_string(),
            ),
            PruneError::LibraryNotFound(_) => Some(
                "💡 Suggestion: Check that the distribution has a lib/python3.X directory, or set library_dir_pattern in your policy file"
                    .to_string(),
            ),
            PruneError::Yaml(e) => Some(format!(
                "💡 Suggestion: Check your policy file syntax. Every field is a list of strings, e.g.\n  removable_dirs:\n    - tkinter\n    - idlelib\n\nError details: {}",
                e
            )),
            PruneError::Config(msg) => {
                if msg.contains("unknown field") {
                    Some(
                        "💡 Suggestion: Check the field names in your policy file for typos"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            PruneError::Pattern(_) => Some(
                "💡 Suggestion: Patterns support '*', '?' and '[...]' and are matched against file and directory names only"
                    .to_string(),
            ),
            PruneError::Fs { source, .. } | PruneError::Io(source) => {
                if source.kind() == std::io::ErrorKind::PermissionDenied {
                    Some(
                        "💡 Suggestion: Check file permissions, or try running with appropriate permissions"
                            .to_string(),
                    )
                } else if source.kind() == std::io::ErrorKind::NotFound {
                    Some(
                        "💡 Suggestion: The file or directory may have been modified during the run. Make sure nothing else is using the distribution"
                            .to_string(),
                    )
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

/// Format error with helpful suggestions
pub fn format_error_with_help(error: &PruneError) -> String {
    let mut output = format!("Error: {}", error);

    if let Some(help) = error.help() {
        output.push_str("\n\n");
        output.push_str(&help);
    }

    output
}
