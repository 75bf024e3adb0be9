use crate::core::PruneResult;
use std::path::Path;
use walkdir::WalkDir;

/// Total size in bytes of every regular file under `root`.
///
/// Symlinks are not followed, so linked files are neither counted twice
/// nor counted from outside the tree.
pub fn tree_size(root: &Path) -> PruneResult<u64> {
    let mut total = 0u64;
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
