// src/types.rs

//! Shared identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a build unit: the manifest directory plus the unit
/// name, rendered as `src/jvm/lib:lib`.
///
/// Addresses are supplied by the host tool's identity provider and used
/// verbatim here, both as part of field identity and as the join-root for
/// relative patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    /// Directory of the unit's manifest, relative to the build root.
    pub spec_path: String,
    /// Unit name within that manifest.
    pub name: String,
}

impl Address {
    pub fn new(spec_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            spec_path: spec_path.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.spec_path, self.name)
    }
}
