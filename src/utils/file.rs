//! File system helpers shared by the line reverser and the config store

use crate::error::TextError;
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it if necessary
pub fn ensure_parent_exists<P: AsRef<Path>>(path: P) -> Result<(), TextError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| TextError::Io {
                path: parent.to_string_lossy().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Whether two paths point at the same file once resolved
pub fn same_file<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> bool {
    match (a.as_ref().canonicalize(), b.as_ref().canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a.as_ref() == b.as_ref(),
    }
}
