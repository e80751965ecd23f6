//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::SvgName;

/// Pick a path in `dir` for `name` that does not exist yet.
///
/// The preferred name is tried first, then `{stem}_1.svg`, `{stem}_2.svg`, ...
pub fn unique_destination(dir: &Path, name: &SvgName) -> PathBuf {
    let path = dir.join(&name.file_name);
    if !path.exists() {
        return path;
    }

    let mut counter = 1;
    loop {
        let path = dir.join(name.with_counter(counter));
        if !path.exists() {
            return path;
        }
        counter += 1;
    }
}

/// Ensure a directory exists, creating it and its parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
