// src/fields/sources.rs

//! The scalar sources field and its resolution entry point.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::errors::{GlobspecError, Result};
use crate::fields::id::FieldId;
use crate::spec::decl::{DeclValue, normalize_value};
use crate::spec::dialect::{Dialect, GlobSpec};
use crate::spec::filespec::{Filespec, resolve_exclude_globs};
use crate::spec::path_globs::PathGlobs;
use crate::types::Address;

/// A resolved source-selection argument for one build unit, ready to attach
/// to a graph node. Immutable after construction; owned by the node that
/// requested it.
#[derive(Debug, Clone)]
pub struct SourcesField {
    id: FieldId,
    filespec: Filespec,
    base_globs: GlobSpec,
    path_globs: PathGlobs,
}

impl SourcesField {
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn address(&self) -> &Address {
        &self.id.address
    }

    /// The argument this field was resolved from: usually `sources`,
    /// occasionally `resources`.
    pub fn arg(&self) -> &str {
        &self.id.arg
    }

    /// Canonical filespec, for display and matching without re-walking.
    pub fn filespec(&self) -> &Filespec {
        &self.filespec
    }

    /// The originating glob spec, kept for display.
    pub fn base_globs(&self) -> &GlobSpec {
        &self.base_globs
    }

    /// The walk plan handed to the filesystem walker.
    pub fn path_globs(&self) -> &PathGlobs {
        &self.path_globs
    }
}

/// Equality and hashing are scoped to the identity key; see [`FieldId`].
impl PartialEq for SourcesField {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SourcesField {}

impl Hash for SourcesField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SourcesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SourcesField(address={}, arg={}, globs={})",
            self.id.address, self.id.arg, self.base_globs
        )
    }
}

/// Resolve one source argument into a field.
///
/// An explicit declaration (even an empty one) is compiled as given,
/// merged with any declaration-level excludes. An absent declaration falls
/// back to `default_globs` when provided, with `default_excludes`
/// concatenated after the declaration-level excludes; with no defaults the
/// argument produces no field at all.
pub fn resolve_field(
    address: &Address,
    arg: &str,
    decl: Option<&DeclValue>,
    raw_excludes: Option<&DeclValue>,
    base_dir: &str,
    default_globs: Option<&[&str]>,
    default_excludes: Option<&[&str]>,
) -> Result<Option<SourcesField>> {
    let resolved = resolve_spec(decl, raw_excludes, base_dir, default_globs, default_excludes)
        .map_err(|source| GlobspecError::Resolve {
            address: address.clone(),
            arg: arg.to_string(),
            source: Box::new(source),
        })?;

    let Some(spec) = resolved else {
        return Ok(None);
    };

    let filespec = spec.filespec();
    let path_globs = spec.to_path_globs(base_dir);
    debug!(
        address = %address,
        arg = %arg,
        include = ?path_globs.include,
        exclude = ?path_globs.exclude,
        "resolved sources field"
    );

    Ok(Some(SourcesField {
        id: FieldId::new(address.clone(), arg),
        filespec,
        base_globs: spec,
        path_globs,
    }))
}

fn resolve_spec(
    decl: Option<&DeclValue>,
    raw_excludes: Option<&DeclValue>,
    base_dir: &str,
    default_globs: Option<&[&str]>,
    default_excludes: Option<&[&str]>,
) -> Result<Option<GlobSpec>> {
    match decl {
        Some(value) => {
            let extra = resolve_exclude_globs(raw_excludes, base_dir)?;
            let spec = normalize_value(Some(value), base_dir)?.append_exclude_globs(extra);
            Ok(Some(spec))
        }
        None => match default_globs {
            Some(globs) => {
                let patterns = globs.iter().map(|g| g.to_string()).collect();
                let spec = GlobSpec::new(Dialect::Globs, patterns, base_dir, raw_excludes)?
                    .append_exclude_globs(default_excludes.unwrap_or(&[]).iter().copied());
                Ok(Some(spec))
            }
            None => Ok(None),
        },
    }
}
