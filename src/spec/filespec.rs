// src/spec/filespec.rs

//! Canonical filespec representation and exclude resolution.

use serde::{Deserialize, Serialize};

use crate::errors::{GlobspecError, Result};
use crate::spec::decl::{DeclValue, normalize_value};

/// One group of excluded glob strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeSpec {
    pub globs: Vec<String>,
}

/// Canonical included/excluded description of a resolved declaration, usable
/// for display and matching without re-walking.
///
/// The structure is deliberately non-recursive: an exclude group is a flat
/// list of globs and can never carry excludes of its own, which keeps
/// filespecs trivially serializable and comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filespec {
    pub globs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<ExcludeSpec>,
}

impl Filespec {
    /// Assemble from included globs and a flattened exclude group. An empty
    /// exclude list produces no group at all.
    pub(crate) fn new(globs: Vec<String>, excluded: Vec<String>) -> Self {
        let exclude = if excluded.is_empty() {
            Vec::new()
        } else {
            vec![ExcludeSpec { globs: excluded }]
        };
        Self { globs, exclude }
    }

    /// All excluded globs across groups, in declaration order.
    pub fn excluded_globs(&self) -> impl Iterator<Item = &str> {
        self.exclude
            .iter()
            .flat_map(|group| group.globs.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// Stable content fingerprint, suitable for keying walk-result caches.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for glob in &self.globs {
            hasher.update(glob.as_bytes());
            hasher.update(b"\n");
        }
        hasher.update(b"--\n");
        for group in &self.exclude {
            for glob in &group.globs {
                hasher.update(glob.as_bytes());
                hasher.update(b"\n");
            }
            hasher.update(b"-\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// Resolve an exclude declaration into its flattened glob strings.
///
/// The value must be a list; a bare string (or any other non-list shape) is
/// rejected. Each element may be a literal path, a list of literal paths, or
/// a glob spec, and is recursively normalized; an element that resolves to a
/// spec carrying its own excludes is rejected, capping exclude depth at
/// exactly one level.
pub(crate) fn resolve_exclude_globs(
    raw: Option<&DeclValue>,
    spec_path: &str,
) -> Result<Vec<String>> {
    let items = match raw {
        None => return Ok(Vec::new()),
        Some(DeclValue::List(items)) => items,
        Some(other) => {
            return Err(GlobspecError::UnsupportedExcludeType {
                value: other.describe(),
            });
        }
    };

    let mut excluded = Vec::new();
    for item in items {
        if let DeclValue::Other(_) = item {
            return Err(GlobspecError::UnsupportedGlobValueType {
                value: item.describe(),
            });
        }
        let spec = normalize_value(Some(item), spec_path)?;
        if !spec.excluded_globs().is_empty() {
            return Err(GlobspecError::NestedExcludeNotSupported {
                value: item.describe(),
            });
        }
        excluded.extend(spec.included_globs().iter().cloned());
    }
    Ok(excluded)
}
