// src/spec/path_globs.rs

//! Walk plans: filespecs joined under a base directory.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::errors::{GlobspecError, Result};

/// A filesystem-walk plan: included and excluded glob strings, each joined
/// under `base_dir`, ready for hand-off to the walker.
///
/// Purely descriptive and derived deterministically; it carries no identity
/// of its own, and no I/O happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathGlobs {
    pub base_dir: String,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl PathGlobs {
    /// Join `include`/`exclude` globs under `base_dir`, order preserved
    /// (exclude groups arrive already concatenated).
    pub fn create(base_dir: &str, include: &[String], exclude: &[String]) -> Self {
        Self {
            base_dir: base_dir.to_string(),
            include: include.iter().map(|g| join_glob(base_dir, g)).collect(),
            exclude: exclude.iter().map(|g| join_glob(base_dir, g)).collect(),
        }
    }

    /// Compile the plan into a reusable matcher for root-relative paths.
    pub fn matcher(&self) -> Result<PathGlobMatcher> {
        Ok(PathGlobMatcher {
            include: build_glob_set(&self.include)?,
            exclude: build_glob_set(&self.exclude)?,
        })
    }

    /// Stable content fingerprint, suitable for keying walk-result caches.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.base_dir.as_bytes());
        hasher.update(b"\n--\n");
        for glob in &self.include {
            hasher.update(glob.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(b"--\n");
        for glob in &self.exclude {
            hasher.update(glob.as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// Join a glob string under a base directory.
///
/// Glob strings are not OS paths; the separator is always `/`.
fn join_glob(base_dir: &str, glob: &str) -> String {
    if base_dir.is_empty() {
        glob.to_string()
    } else {
        format!("{}/{}", base_dir.trim_end_matches('/'), glob)
    }
}

/// Compiled include/exclude matcher for root-relative paths.
#[derive(Debug, Clone)]
pub struct PathGlobMatcher {
    include: GlobSet,
    exclude: GlobSet,
}

impl PathGlobMatcher {
    /// Whether `rel_path` (relative to the walk root, `/`-separated) is
    /// selected by the plan.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.include.is_match(rel_path) && !self.exclude.is_match(rel_path)
    }
}

/// Build a `GlobSet` where `*` stays within one directory level and `**`
/// descends.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| GlobspecError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| GlobspecError::InvalidPattern {
        pattern: source.glob().unwrap_or_default().to_string(),
        source,
    })
}
