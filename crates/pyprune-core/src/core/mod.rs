pub mod error;
pub mod error_help;
pub mod fs;

pub use error::{PruneError, PruneResult};
pub use error_help::{format_error_with_help, ErrorHelp};
