// src/walk.rs

//! Reference walker for path-glob plans.
//!
//! The resolution layer only *describes* walks; this module executes a plan
//! against a [`FileSystem`] on behalf of the engine, matching root-relative
//! paths through the plan's compiled matcher.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::spec::path_globs::PathGlobs;

/// Collect all files under `root` selected by the plan.
///
/// Paths are matched relative to `root` with `/` separators and returned
/// sorted, so results are stable across filesystems.
pub fn expand_globs(
    fs: &dyn FileSystem,
    root: &Path,
    path_globs: &PathGlobs,
) -> Result<Vec<PathBuf>> {
    let matcher = path_globs.matcher()?;
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                if let Ok(rel) = path.strip_prefix(root) {
                    let rel_str = rel.to_string_lossy().replace('\\', "/");
                    if matcher.matches(&rel_str) {
                        files.push(path);
                    }
                }
            }
        }
    }

    files.sort();
    Ok(files)
}
